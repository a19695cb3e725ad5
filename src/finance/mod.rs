//! Pure financial calculations: balances, expense totals, payment status
//! classification, and currency display formatting.

use crate::models::{Currency, ExpenseCategory, ExpenseEntry, Project};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Outstanding amount on a project. Negative means overpayment and is never
/// clamped.
pub fn balance(total_price: f64, upfront_payment: f64) -> f64 {
    total_price - upfront_payment
}

/// Raw sum of all expense amounts. Entries keep independent currencies and
/// the amounts are summed as-is, without conversion.
pub fn total_expenses(expenses: &BTreeMap<ExpenseCategory, ExpenseEntry>) -> f64 {
    expenses.values().map(|e| e.amount).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }
}

/// Three-way classification with exact boundaries: a balance of zero is
/// Paid, a balance of exactly half the price is Unpaid.
pub fn status_of(balance: f64, total_price: f64) -> PaymentStatus {
    if balance <= 0.0 {
        PaymentStatus::Paid
    } else if balance < total_price * 0.5 {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Unpaid
    }
}

/// Symbol-prefixed, thousands-grouped amount. MWK renders without decimals,
/// everything else with exactly two. Negative amounts keep their sign after
/// the symbol (`$-150.00`).
pub fn format_currency(amount: f64, currency: Currency) -> String {
    format!(
        "{}{}",
        currency.symbol(),
        group_thousands(amount, currency.decimals())
    )
}

fn group_thousands(amount: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, amount);
    let (number, frac) = match raw.split_once('.') {
        Some((n, f)) => (n, Some(f)),
        None => (raw.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Dashboard figures derived from the full project collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTotals {
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub total_projects: usize,
    pub total_expenses: f64,
    pub total_profit: f64,
}

pub fn dashboard_totals(projects: &[Project], today: NaiveDate) -> DashboardTotals {
    let total_revenue: f64 = projects.iter().map(|p| p.total_price).sum();
    let monthly_revenue: f64 = projects
        .iter()
        .filter(|p| {
            p.date()
                .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
        })
        .map(|p| p.total_price)
        .sum();
    let total_expenses: f64 = projects.iter().map(|p| p.total_expenses).sum();
    DashboardTotals {
        total_revenue,
        monthly_revenue,
        total_projects: projects.len(),
        total_expenses,
        total_profit: total_revenue - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessType, Currency};

    #[test]
    fn balance_may_be_negative() {
        assert_eq!(balance(100.0, 150.0), -50.0);
    }

    #[test]
    fn status_boundaries_are_exact() {
        assert_eq!(status_of(0.0, 100.0), PaymentStatus::Paid);
        assert_eq!(status_of(-10.0, 100.0), PaymentStatus::Paid);
        assert_eq!(status_of(49.0, 100.0), PaymentStatus::Partial);
        assert_eq!(status_of(50.0, 100.0), PaymentStatus::Unpaid);
        assert_eq!(status_of(80.0, 100.0), PaymentStatus::Unpaid);
    }

    #[test]
    fn expenses_sum_ignores_entry_currencies() {
        let mut expenses = BTreeMap::new();
        expenses.insert(
            ExpenseCategory::Transport,
            ExpenseEntry {
                amount: 100.0,
                currency: Currency::Usd,
            },
        );
        expenses.insert(
            ExpenseCategory::Airtime,
            ExpenseEntry {
                amount: 5000.0,
                currency: Currency::Mwk,
            },
        );
        assert_eq!(total_expenses(&expenses), 5100.0);
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(1234567.891, Currency::Usd), "$1,234,567.89");
        assert_eq!(format_currency(1500.75, Currency::Mwk), "K1,501");
        assert_eq!(format_currency(0.0, Currency::Gbp), "£0.00");
        assert_eq!(format_currency(-150.0, Currency::Eur), "€-150.00");
        assert_eq!(format_currency(999.0, Currency::Zar), "R999.00");
    }

    #[test]
    fn dashboard_splits_monthly_revenue() {
        let mut a: Project = serde_json::from_str(
            r#"{"id":"1","businessType":"digitalFootprints","projectDate":"2026-08-10","totalPrice":100.0}"#,
        )
        .unwrap();
        a.recompute();
        let mut b = a.clone();
        b.id = "2".to_string();
        b.project_date = "2026-01-10".to_string();
        b.total_price = 40.0;
        assert_eq!(a.business_type, BusinessType::DigitalFootprints);

        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let totals = dashboard_totals(&[a, b], today);
        assert_eq!(totals.total_revenue, 140.0);
        assert_eq!(totals.monthly_revenue, 100.0);
        assert_eq!(totals.total_projects, 2);
        assert_eq!(totals.total_profit, 140.0);
    }
}
