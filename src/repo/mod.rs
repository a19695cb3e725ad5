//! Whole-collection record repositories.
//!
//! Each entity kind is persisted as one JSON blob per business context,
//! rewritten in full on every mutation. Last writer wins; there is no
//! partial write and no concurrency check.

use crate::errors::AppResult;
use crate::finance::{self, PaymentStatus};
use crate::models::{BusinessType, Client, ClientStatus, Invoice, InvoiceStatus, Project};
use crate::store::{KeyValueStore, Scope};
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A persistable entity kind. `normalize` is the hook where derived fields
/// are recomputed so that stored blobs can never carry stale values.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key suffix: `Projects`, `Clients`, `Invoices`.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn created_at(&self) -> &str;
    fn set_created_at(&mut self, ts: String);
    fn normalize(&mut self) {}
}

impl Record for Project {
    const KIND: &'static str = "Projects";

    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn set_created_at(&mut self, ts: String) {
        self.created_at = ts;
    }
    fn normalize(&mut self) {
        self.recompute();
    }
}

impl Record for Client {
    const KIND: &'static str = "Clients";

    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn set_created_at(&mut self, ts: String) {
        self.created_at = ts;
    }
}

impl Record for Invoice {
    const KIND: &'static str = "Invoices";

    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn set_created_at(&mut self, ts: String) {
        self.created_at = ts;
    }
    fn normalize(&mut self) {
        self.recompute();
    }
}

pub struct Repository<'a, T: Record> {
    store: &'a KeyValueStore,
    business: BusinessType,
    _kind: PhantomData<T>,
}

impl<'a, T: Record> Repository<'a, T> {
    pub fn new(store: &'a KeyValueStore, business: BusinessType) -> Self {
        Self {
            store,
            business,
            _kind: PhantomData,
        }
    }

    pub fn business(&self) -> BusinessType {
        self.business
    }

    pub fn storage_key(&self) -> String {
        format!("{}{}", self.business.key_prefix(), T::KIND)
    }

    /// The whole collection for this business context; empty when the blob
    /// is absent or undecodable.
    pub fn load_all(&self) -> Vec<T> {
        self.store
            .load(&self.storage_key(), Scope::Durable)
            .unwrap_or_default()
    }

    /// Full overwrite of the persisted collection.
    pub fn save_all(&self, records: &[T]) -> AppResult<()> {
        self.store
            .save(&self.storage_key(), &records, Scope::Durable)
    }

    /// Replace the record with a matching id in place, preserving its
    /// original `createdAt`; prepend otherwise. Derived fields are
    /// normalized before the collection is written back.
    pub fn upsert(&self, mut record: T) -> AppResult<()> {
        let mut records = self.load_all();
        record.normalize();
        match records.iter().position(|r| r.id() == record.id()) {
            Some(index) => {
                record.set_created_at(records[index].created_at().to_string());
                records[index] = record;
            }
            None => {
                if record.created_at().is_empty() {
                    record.set_created_at(Utc::now().to_rfc3339());
                }
                records.insert(0, record);
            }
        }
        self.save_all(&records)
    }

    /// Silently a no-op when the id is absent: nothing is rewritten, so the
    /// persisted blob stays byte-identical. Returns whether a record was
    /// removed.
    pub fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut records = self.load_all();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save_all(&records)?;
        Ok(true)
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.load_all().into_iter().find(|r| r.id() == id)
    }
}

// ---------------------------
// Pure query functions
// ---------------------------

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive substring search across the project text fields.
pub fn search_projects(projects: &[Project], term: &str) -> Vec<Project> {
    let term = term.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            matches(&p.client_name, &term)
                || matches(&p.client_phone, &term)
                || matches(&p.project_name, &term)
                || matches(&p.location, &term)
                || matches(&p.project_details, &term)
        })
        .cloned()
        .collect()
}

pub fn filter_projects_by_type(projects: &[Project], project_type: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.project_type == project_type)
        .cloned()
        .collect()
}

pub fn filter_projects_by_status(projects: &[Project], status: PaymentStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| finance::status_of(p.balance, p.total_price) == status)
        .cloned()
        .collect()
}

pub fn search_clients(clients: &[Client], term: &str) -> Vec<Client> {
    let term = term.to_lowercase();
    clients
        .iter()
        .filter(|c| {
            matches(&c.first_name, &term)
                || matches(&c.last_name, &term)
                || matches(&c.company, &term)
                || matches(&c.email, &term)
                || matches(&c.phone, &term)
        })
        .cloned()
        .collect()
}

pub fn filter_clients_by_status(clients: &[Client], status: ClientStatus) -> Vec<Client> {
    clients
        .iter()
        .filter(|c| c.status == status)
        .cloned()
        .collect()
}

pub fn search_invoices(invoices: &[Invoice], term: &str) -> Vec<Invoice> {
    let term = term.to_lowercase();
    invoices
        .iter()
        .filter(|i| {
            matches(&i.invoice_number, &term)
                || matches(&i.client_name, &term)
                || matches(&i.client_email, &term)
        })
        .cloned()
        .collect()
}

pub fn filter_invoices_by_status(invoices: &[Invoice], status: InvoiceStatus) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|i| i.status == status)
        .cloned()
        .collect()
}

/// Project count and summed revenue for one client, recomputed from the
/// authoritative Project collection by name match. The stored counters on
/// the Client record are denormalized and may drift, so they are never
/// reported directly.
pub fn client_stats(projects: &[Project], client_name: &str) -> (usize, f64) {
    let matching: Vec<&Project> = projects
        .iter()
        .filter(|p| p.client_name == client_name)
        .collect();
    let revenue = matching.iter().map(|p| p.total_price).sum();
    (matching.len(), revenue)
}
