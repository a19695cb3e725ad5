//! Invoices with ordered line items and derived totals.

use super::{BusinessType, Currency};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub service: String,
    #[serde(default)]
    pub description: String,
    pub quantity: f64,
    pub price: f64,
    /// Derived: `quantity * price`, recomputed on save.
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub notes: String,
    /// Weak reference to a project id; never enforced to exist.
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub business_type: BusinessType,
    #[serde(default)]
    pub created_at: String,
}

impl Invoice {
    /// Business-prefixed number: `{DF|FF}-YYYYMMDD-NNN` with a random
    /// three-digit suffix. Not guaranteed globally unique.
    pub fn generate_number(business: BusinessType) -> String {
        let date = Utc::now().format("%Y%m%d");
        let random: u32 = rand::thread_rng().gen_range(0..1000);
        format!("{}-{}-{:03}", business.invoice_prefix(), date, random)
    }

    /// Recompute item totals, subtotal, and total. Tax is kept as entered.
    pub fn recompute(&mut self) {
        for item in &mut self.items {
            item.total = item.quantity * item.price;
        }
        self.subtotal = self.items.iter().map(|i| i.total).sum();
        self.total = self.subtotal + self.tax;
    }

    /// Required fields before an invoice may be saved. Failing validation
    /// aborts the save with state unchanged.
    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.is_empty() {
            return Err("Please enter client name".to_string());
        }
        if self.invoice_number.is_empty() {
            return Err("Please enter invoice number".to_string());
        }
        if self.date.is_empty() {
            return Err("Please enter invoice date".to_string());
        }
        if self.due_date.is_empty() {
            return Err("Please enter due date".to_string());
        }
        if self.items.is_empty() {
            return Err("Please add at least one item".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Invoice {
        Invoice {
            id: "1".to_string(),
            invoice_number: "DF-20260801-042".to_string(),
            client_name: "Aline".to_string(),
            client_email: String::new(),
            client_phone: String::new(),
            client_address: String::new(),
            date: "2026-08-01".to_string(),
            due_date: "2026-08-15".to_string(),
            currency: Currency::Usd,
            items: vec![
                InvoiceItem {
                    service: "photography".to_string(),
                    description: "Full day".to_string(),
                    quantity: 2.0,
                    price: 150.0,
                    total: 0.0,
                },
                InvoiceItem {
                    service: "editing".to_string(),
                    description: String::new(),
                    quantity: 3.0,
                    price: 40.0,
                    total: 1.0,
                },
            ],
            subtotal: 0.0,
            tax: 25.0,
            total: 0.0,
            notes: String::new(),
            project_id: String::new(),
            status: InvoiceStatus::Draft,
            business_type: BusinessType::DigitalFootprints,
            created_at: String::new(),
        }
    }

    #[test]
    fn recompute_derives_item_totals_and_grand_total() {
        let mut inv = sample();
        inv.recompute();
        assert_eq!(inv.items[0].total, 300.0);
        assert_eq!(inv.items[1].total, 120.0);
        assert_eq!(inv.subtotal, 420.0);
        assert_eq!(inv.total, 445.0);
    }

    #[test]
    fn validation_rejects_missing_fields() {
        let mut inv = sample();
        inv.due_date.clear();
        assert!(inv.validate().is_err());
        let mut inv = sample();
        inv.items.clear();
        assert!(inv.validate().is_err());
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn generated_numbers_carry_business_prefix() {
        let n = Invoice::generate_number(BusinessType::FilmFixer);
        assert!(n.starts_with("FF-"));
        // prefix + 8-digit date + 3-digit suffix
        assert_eq!(n.len(), "FF-YYYYMMDD-NNN".len());
    }
}
