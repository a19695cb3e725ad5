//! CSV export and client import.

use super::model::{client_headers, client_to_row, project_headers, project_to_row};
use super::notify_export_success;
use crate::errors::{AppError, AppResult};
use crate::models::{BusinessType, Client, ClientStatus, ClientType, Project, new_record_id};
use chrono::Utc;
use csv::{ReaderBuilder, Writer};
use std::path::Path;

pub fn export_projects_csv(path: &Path, projects: &[Project]) -> AppResult<()> {
    let rows: Vec<Vec<String>> = projects.iter().map(project_to_row).collect();
    write_csv(path, &project_headers(), &rows)?;
    notify_export_success("CSV", path);
    Ok(())
}

pub fn export_clients_csv(path: &Path, clients: &[Client]) -> AppResult<()> {
    let rows: Vec<Vec<String>> = clients.iter().map(client_to_row).collect();
    write_csv(path, &client_headers(), &rows)?;
    notify_export_success("CSV", path);
    Ok(())
}

fn write_csv(path: &Path, headers: &[String], rows: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;
    wtr.write_record(headers)
        .map_err(|e| AppError::Export(e.to_string()))?;
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Import clients from a CSV table. The first row is a header and is
/// skipped; the remaining rows are mapped positionally to the fixed client
/// column order (first name .. address at 0-8, projects 9, total revenue
/// 10, notes at 13; columns 11-12 carry display timestamps that are
/// regenerated on import). Quoted fields are handled by the parser.
pub fn import_clients_csv(path: &Path, business: BusinessType) -> AppResult<Vec<Client>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(e.to_string()))?;

    let now = Utc::now().to_rfc3339();
    let id_base = new_record_id();
    let mut clients = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AppError::Import(e.to_string()))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        clients.push(Client {
            id: format!("{}{}", id_base, i + 1),
            first_name: field(0),
            last_name: field(1),
            company: field(2),
            email: field(3),
            phone: field(4),
            client_type: ClientType::from_str_or_default(&field(5)),
            status: ClientStatus::from_str_or_default(&field(6)),
            website: field(7),
            address: field(8),
            projects: field(9).parse().unwrap_or(0),
            total_revenue: field(10).parse().unwrap_or(0.0),
            created_at: now.clone(),
            last_contact: now.clone(),
            notes: field(13),
            business_type: business,
        });
    }

    Ok(clients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("medialedger_csv_{name}.csv"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn import_maps_columns_positionally() {
        let path = temp_csv(
            "positional",
            "First Name,Last Name,Company,Email,Phone,Type,Status,Website,Address,Projects,Total Revenue,Created,Last Contact,Notes\n\
             Jane,Phiri,Acme,jane@acme.mw,099,company,vip,,Lilongwe,3,1500.5,x,y,Key account\n",
        );
        let clients = import_clients_csv(&path, BusinessType::DigitalFootprints).unwrap();
        assert_eq!(clients.len(), 1);
        let c = &clients[0];
        assert_eq!(c.first_name, "Jane");
        assert_eq!(c.client_type, ClientType::Company);
        assert_eq!(c.status, ClientStatus::Vip);
        assert_eq!(c.projects, 3);
        assert_eq!(c.total_revenue, 1500.5);
        assert_eq!(c.notes, "Key account");
        assert_eq!(c.business_type, BusinessType::DigitalFootprints);
    }

    #[test]
    fn import_handles_quoted_commas_and_short_rows() {
        let path = temp_csv(
            "quoted",
            "h1,h2,h3,h4,h5,h6,h7,h8,h9,h10,h11,h12,h13,h14\n\
             John,Doe,\"Doe, Sons & Co\",john@doe.com\n",
        );
        let clients = import_clients_csv(&path, BusinessType::FilmFixer).unwrap();
        assert_eq!(clients[0].company, "Doe, Sons & Co");
        assert_eq!(clients[0].phone, "");
        assert_eq!(clients[0].status, ClientStatus::Active);
    }

    #[test]
    fn export_then_reimport_clients() {
        let original: Client = serde_json::from_str(
            r#"{"id":"1","firstName":"Jane","lastName":"Phiri","email":"j@p.mw",
                "type":"organization","status":"inactive","notes":"hello",
                "projects":2,"totalRevenue":900.0,"businessType":"filmFixer"}"#,
        )
        .unwrap();
        let path = env::temp_dir().join("medialedger_csv_roundtrip.csv");
        export_clients_csv(&path, std::slice::from_ref(&original)).unwrap();

        let back = import_clients_csv(&path, BusinessType::FilmFixer).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].first_name, "Jane");
        assert_eq!(back[0].client_type, ClientType::Organization);
        assert_eq!(back[0].status, ClientStatus::Inactive);
        assert_eq!(back[0].projects, 2);
        assert_eq!(back[0].total_revenue, 900.0);
        assert_eq!(back[0].notes, "hello");
    }
}
