//! Period-filtered revenue, expense, and client aggregates.
//!
//! "Now" is always an explicit date argument so results are reproducible;
//! the CLI passes today's local date.

use crate::models::{BusinessType, ExpenseCategory, Project};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Month,
    Quarter,
    Year,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
            Period::All => "all",
        }
    }
}

fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3
}

/// Projects whose date falls in the current calendar month/quarter/year
/// relative to `today`. `All` passes everything through. Undated projects
/// never match a calendar period.
pub fn filter_by_period(projects: &[Project], period: Period, today: NaiveDate) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| match period {
            Period::All => true,
            Period::Month => p
                .date()
                .is_some_and(|d| d.year() == today.year() && d.month() == today.month()),
            Period::Quarter => p
                .date()
                .is_some_and(|d| d.year() == today.year() && quarter_of(d) == quarter_of(today)),
            Period::Year => p.date().is_some_and(|d| d.year() == today.year()),
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueBucket {
    pub label: String,
    pub revenue: f64,
}

/// Total price bucketed under a period label, in first-seen order. The
/// order is part of the contract: buckets are never re-sorted.
pub fn group_revenue_by_period(projects: &[Project], period: Period) -> Vec<RevenueBucket> {
    let mut buckets: Vec<RevenueBucket> = Vec::new();
    for p in projects {
        let label = match period {
            Period::All => "All Time".to_string(),
            _ => match p.date() {
                Some(d) => match period {
                    Period::Month => d.format("%b %Y").to_string(),
                    Period::Quarter => format!("Q{} {}", quarter_of(d) + 1, d.year()),
                    _ => d.year().to_string(),
                },
                // calendar buckets need a parseable date
                None => continue,
            },
        };
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.revenue += p.total_price,
            None => buckets.push(RevenueBucket {
                label,
                revenue: p.total_price,
            }),
        }
    }
    buckets
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub label: String,
    pub count: usize,
    /// Percentage of the filtered set, one decimal.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientRank {
    pub name: String,
    pub projects: usize,
    pub revenue: f64,
    pub avg_project_value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub total_revenue: f64,
    pub average_project_value: f64,
    pub total_expenses: f64,
    /// `(revenue - expenses) / revenue * 100`, one decimal; 0 when revenue
    /// is 0.
    pub profit_margin: f64,
    pub total_clients: usize,
    pub repeat_clients: usize,
    pub most_popular_type: String,
    pub total_types: usize,
    pub revenue_data: Vec<RevenueBucket>,
    pub project_type_data: Vec<TypeShare>,
    pub expense_data: Vec<CategoryTotal>,
    pub top_clients: Vec<ClientRank>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn compute_analytics(
    projects: &[Project],
    period: Period,
    business: BusinessType,
    today: NaiveDate,
) -> Analytics {
    let filtered = filter_by_period(projects, period, today);

    let total_revenue: f64 = filtered.iter().map(|p| p.total_price).sum();
    let average_project_value = if filtered.is_empty() {
        0.0
    } else {
        total_revenue / filtered.len() as f64
    };

    let revenue_data = group_revenue_by_period(&filtered, period);

    // type distribution, first-seen order
    let mut project_type_data: Vec<TypeShare> = Vec::new();
    for p in &filtered {
        let label = business.type_label(&p.project_type);
        match project_type_data.iter_mut().find(|t| t.label == label) {
            Some(share) => share.count += 1,
            None => project_type_data.push(TypeShare {
                label,
                count: 1,
                percentage: 0.0,
            }),
        }
    }
    for share in &mut project_type_data {
        share.percentage = round1(share.count as f64 / filtered.len() as f64 * 100.0);
    }

    let total_expenses: f64 = filtered.iter().map(|p| p.total_expenses).sum();
    let profit_margin = if total_revenue > 0.0 {
        round1((total_revenue - total_expenses) / total_revenue * 100.0)
    } else {
        0.0
    };

    let expense_data = ExpenseCategory::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            total: filtered.iter().map(|p| p.expense_amount(category)).sum(),
        })
        .collect();

    // client ranking, grouped in first-seen order
    let mut clients: Vec<ClientRank> = Vec::new();
    for p in &filtered {
        let name = if p.client_name.is_empty() {
            "Unknown"
        } else {
            &p.client_name
        };
        match clients.iter_mut().find(|c| c.name == name) {
            Some(c) => {
                c.projects += 1;
                c.revenue += p.total_price;
            }
            None => clients.push(ClientRank {
                name: name.to_string(),
                projects: 1,
                revenue: p.total_price,
                avg_project_value: 0.0,
            }),
        }
    }
    let total_clients = clients.len();
    let repeat_clients = clients.iter().filter(|c| c.projects > 1).count();

    // stable sort: revenue ties keep first-seen order
    let mut top_clients = clients;
    top_clients.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(std::cmp::Ordering::Equal));
    top_clients.truncate(5);
    for c in &mut top_clients {
        c.avg_project_value = c.revenue / c.projects as f64;
    }

    // strictly-greater scan: ties resolve to the type seen first
    let most_popular_type = project_type_data
        .iter()
        .fold(None::<&TypeShare>, |best, current| match best {
            Some(b) if current.count > b.count => Some(current),
            None => Some(current),
            _ => best,
        })
        .map(|t| t.label.clone())
        .unwrap_or_else(|| "N/A".to_string());

    Analytics {
        total_revenue,
        average_project_value,
        total_expenses,
        profit_margin,
        total_clients,
        repeat_clients,
        most_popular_type,
        total_types: project_type_data.len(),
        revenue_data,
        project_type_data,
        expense_data,
        top_clients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessType;

    fn project(id: &str, client: &str, date: &str, price: f64, ptype: &str) -> Project {
        serde_json::from_str(&format!(
            r#"{{"id":"{id}","clientName":"{client}","projectDate":"{date}",
                "projectType":"{ptype}","totalPrice":{price},
                "businessType":"digitalFootprints"}}"#
        ))
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn empty_set_produces_zeroes_without_panicking() {
        let a = compute_analytics(&[], Period::Month, BusinessType::DigitalFootprints, today());
        assert_eq!(a.average_project_value, 0.0);
        assert_eq!(a.profit_margin, 0.0);
        assert_eq!(a.total_clients, 0);
        assert_eq!(a.most_popular_type, "N/A");
        assert_eq!(a.expense_data.len(), 6);
        assert!(a.expense_data.iter().all(|e| e.total == 0.0));
    }

    #[test]
    fn month_filter_and_totals_scenario() {
        let projects = vec![
            project("1", "A", "2026-08-01", 100.0, "photography"),
            project("2", "B", "2026-08-10", 200.0, "web"),
            project("3", "C", "2026-08-20", 300.0, "web"),
            project("4", "D", "2026-03-05", 900.0, "design"),
        ];
        let filtered = filter_by_period(&projects, Period::Month, today());
        assert_eq!(filtered.len(), 3);

        let a = compute_analytics(
            &projects,
            Period::Month,
            BusinessType::DigitalFootprints,
            today(),
        );
        assert_eq!(a.total_revenue, 600.0);
        assert_eq!(a.average_project_value, 200.0);
        assert_eq!(a.total_types, 2);
    }

    #[test]
    fn quarter_filter_uses_floor_month_over_three() {
        let projects = vec![
            project("1", "A", "2026-07-01", 10.0, "web"),
            project("2", "B", "2026-09-30", 20.0, "web"),
            project("3", "C", "2026-06-30", 40.0, "web"),
        ];
        let filtered = filter_by_period(&projects, Period::Quarter, today());
        let ids: Vec<String> = filtered.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn ranking_orders_by_revenue_not_project_count() {
        let projects = vec![
            project("1", "A", "2026-08-01", 100.0, "web"),
            project("2", "A", "2026-08-02", 200.0, "web"),
            project("3", "B", "2026-08-03", 500.0, "web"),
        ];
        let a = compute_analytics(
            &projects,
            Period::Month,
            BusinessType::DigitalFootprints,
            today(),
        );
        assert_eq!(a.top_clients[0].name, "B");
        assert_eq!(a.top_clients[1].name, "A");
        assert_eq!(a.top_clients[1].projects, 2);
        assert_eq!(a.top_clients[1].avg_project_value, 150.0);
        assert_eq!(a.repeat_clients, 1);
    }

    #[test]
    fn revenue_buckets_preserve_first_seen_order() {
        let projects = vec![
            project("1", "A", "2026-03-01", 10.0, "web"),
            project("2", "B", "2026-01-15", 20.0, "web"),
            project("3", "C", "2026-03-20", 30.0, "web"),
        ];
        let buckets = group_revenue_by_period(&projects, Period::Month);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Mar 2026", "Jan 2026"]);
        assert_eq!(buckets[0].revenue, 40.0);
    }

    #[test]
    fn all_period_uses_single_bucket_even_for_undated_projects() {
        let projects = vec![
            project("1", "A", "", 10.0, "web"),
            project("2", "B", "2026-01-15", 20.0, "web"),
        ];
        let buckets = group_revenue_by_period(&projects, Period::All);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "All Time");
        assert_eq!(buckets[0].revenue, 30.0);
    }

    #[test]
    fn popular_type_ties_resolve_to_first_seen() {
        let projects = vec![
            project("1", "A", "2026-08-01", 10.0, "web"),
            project("2", "B", "2026-08-02", 10.0, "design"),
            project("3", "C", "2026-08-03", 10.0, "design"),
            project("4", "D", "2026-08-04", 10.0, "web"),
        ];
        let a = compute_analytics(
            &projects,
            Period::Month,
            BusinessType::DigitalFootprints,
            today(),
        );
        // both types count 2; "Web Development" was encountered first
        assert_eq!(a.most_popular_type, "Web Development");
    }

    #[test]
    fn profit_margin_rounds_to_one_decimal() {
        let mut p = project("1", "A", "2026-08-01", 300.0, "web");
        p.total_expenses = 100.0;
        let a = compute_analytics(
            &[p],
            Period::Month,
            BusinessType::DigitalFootprints,
            today(),
        );
        assert_eq!(a.profit_margin, 66.7);
    }
}
