//! Flat row model shared by the CSV and XLSX exporters.

use crate::finance;
use crate::models::{Client, ExpenseCategory, Project};
use crate::utils::date::format_display_date;
use chrono::DateTime;

/// Fixed project column set: contact fields, per-category amount+currency
/// pairs, then the computed balance/expense/status columns.
pub(crate) fn project_headers() -> Vec<String> {
    let mut headers: Vec<String> = [
        "Client Name",
        "Client Phone Number",
        "Project Name",
        "Project Date",
        "Location",
        "Project Type",
        "Currency",
        "Total Price",
        "Upfront Payment",
        "Balance",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for category in ExpenseCategory::ALL {
        headers.push(category.label().to_string());
        headers.push(format!("{} Currency", currency_header_stem(category)));
    }

    headers.extend(
        ["Total Expenses", "Status", "Project Details", "Created Date"]
            .iter()
            .map(|s| s.to_string()),
    );
    headers
}

// The amount column for internet says "Internet Bundle" but its currency
// column is just "Internet Currency".
fn currency_header_stem(category: ExpenseCategory) -> &'static str {
    match category {
        ExpenseCategory::Internet => "Internet",
        other => other.label(),
    }
}

pub(crate) fn project_to_row(p: &Project) -> Vec<String> {
    let mut row = vec![
        p.client_name.clone(),
        p.client_phone.clone(),
        p.project_name.clone(),
        format_display_date(&p.project_date),
        p.location.clone(),
        p.type_label(),
        p.currency.code().to_string(),
        p.total_price.to_string(),
        p.upfront_payment.to_string(),
        p.balance.to_string(),
    ];
    for category in ExpenseCategory::ALL {
        row.push(p.expense_amount(category).to_string());
        row.push(p.expense_currency(category).code().to_string());
    }
    row.push(p.total_expenses.to_string());
    row.push(
        finance::status_of(p.balance, p.total_price)
            .label()
            .to_string(),
    );
    row.push(p.project_details.clone());
    row.push(created_date(&p.created_at));
    row
}

pub(crate) fn client_headers() -> Vec<String> {
    [
        "First Name",
        "Last Name",
        "Company",
        "Email",
        "Phone",
        "Type",
        "Status",
        "Website",
        "Address",
        "Projects",
        "Total Revenue",
        "Created Date",
        "Last Contact",
        "Notes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub(crate) fn client_to_row(c: &Client) -> Vec<String> {
    vec![
        c.first_name.clone(),
        c.last_name.clone(),
        c.company.clone(),
        c.email.clone(),
        c.phone.clone(),
        c.client_type.as_str().to_string(),
        c.status.as_str().to_string(),
        c.website.clone(),
        c.address.clone(),
        c.projects.to_string(),
        c.total_revenue.to_string(),
        created_date(&c.created_at),
        created_date(&c.last_contact),
        c.notes.clone(),
    ]
}

/// Date portion of an RFC 3339 creation timestamp.
fn created_date(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => format_display_date(&dt.format("%Y-%m-%d").to_string()),
        Err(_) => "N/A".to_string(),
    }
}
