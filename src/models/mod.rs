pub mod business;
pub mod client;
pub mod currency;
pub mod invoice;
pub mod project;

pub use business::BusinessType;
pub use client::{Client, ClientStatus, ClientType};
pub use currency::Currency;
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use project::{ExpenseCategory, ExpenseEntry, Project};

use chrono::Utc;

/// Record ids are millisecond timestamps rendered as strings, matching the
/// layout of blobs produced by earlier versions of the system.
pub fn new_record_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
