//! Project records and their per-category expense entries.

use super::{BusinessType, Currency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed set of expense categories a project can carry. Each category
/// is priced independently and keeps its own currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Transport,
    Food,
    Accommodation,
    Airtime,
    Internet,
    Stationary,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Transport,
        ExpenseCategory::Food,
        ExpenseCategory::Accommodation,
        ExpenseCategory::Airtime,
        ExpenseCategory::Internet,
        ExpenseCategory::Stationary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Airtime => "airtime",
            ExpenseCategory::Internet => "internet",
            ExpenseCategory::Stationary => "stationary",
        }
    }

    /// Column label used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Accommodation => "Accommodation",
            ExpenseCategory::Airtime => "Airtime",
            ExpenseCategory::Internet => "Internet Bundle",
            ExpenseCategory::Stationary => "Stationary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: f64,
    pub currency: Currency,
}

/// A single project for one business context.
///
/// `balance` and `totalExpenses` are derived fields: they are recomputed on
/// every save and never trusted from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub project_name: String,
    /// ISO `YYYY-MM-DD`, may be empty.
    #[serde(default)]
    pub project_date: String,
    #[serde(default)]
    pub location: String,
    /// Stored type value from the business context's type set.
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub upfront_payment: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub expenses: BTreeMap<ExpenseCategory, ExpenseEntry>,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub project_details: String,
    pub business_type: BusinessType,
    #[serde(default)]
    pub created_at: String,
}

impl Project {
    /// Parsed project date, or `None` when missing or malformed. Undated
    /// projects never match a calendar period.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.project_date, "%Y-%m-%d").ok()
    }

    /// Recompute the derived fields from their sources.
    pub fn recompute(&mut self) {
        self.balance = crate::finance::balance(self.total_price, self.upfront_payment);
        self.total_expenses = crate::finance::total_expenses(&self.expenses);
    }

    pub fn expense_amount(&self, category: ExpenseCategory) -> f64 {
        self.expenses.get(&category).map_or(0.0, |e| e.amount)
    }

    /// Currency recorded for a category, falling back to the project currency.
    pub fn expense_currency(&self, category: ExpenseCategory) -> Currency {
        self.expenses
            .get(&category)
            .map_or(self.currency, |e| e.currency)
    }

    pub fn type_label(&self) -> String {
        self.business_type.type_label(&self.project_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            id: "1700000000000".to_string(),
            client_name: "Aline".to_string(),
            client_phone: String::new(),
            project_name: "Wedding shoot".to_string(),
            project_date: "2026-08-12".to_string(),
            location: "Lilongwe".to_string(),
            project_type: "photography".to_string(),
            total_price: 800.0,
            upfront_payment: 300.0,
            balance: 0.0,
            currency: Currency::Usd,
            expenses: BTreeMap::new(),
            total_expenses: 0.0,
            project_details: String::new(),
            business_type: BusinessType::DigitalFootprints,
            created_at: "2026-08-01T08:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn recompute_overrides_stored_derived_fields() {
        let mut p = sample();
        p.balance = 9999.0;
        p.expenses.insert(
            ExpenseCategory::Transport,
            ExpenseEntry {
                amount: 40.0,
                currency: Currency::Usd,
            },
        );
        p.expenses.insert(
            ExpenseCategory::Food,
            ExpenseEntry {
                amount: 15.5,
                currency: Currency::Mwk,
            },
        );
        p.recompute();
        assert_eq!(p.balance, 500.0);
        assert_eq!(p.total_expenses, 55.5);
    }

    #[test]
    fn camel_case_blob_round_trip() {
        let p = sample();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"clientName\""));
        assert!(json.contains("\"totalPrice\""));
        assert!(json.contains("\"businessType\":\"digitalFootprints\""));
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn malformed_date_parses_to_none() {
        let mut p = sample();
        p.project_date = "soon".to_string();
        assert!(p.date().is_none());
        p.project_date.clear();
        assert!(p.date().is_none());
    }
}
