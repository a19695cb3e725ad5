use crate::AppContext;
use crate::cli::parser::ClientAction;
use crate::errors::{AppError, AppResult};
use crate::exchange::{self, ExportFormat};
use crate::finance::format_currency;
use crate::models::{Client, Project, new_record_id};
use crate::repo::{self, Repository};
use crate::ui::messages::{info, success};
use crate::utils::table::Table;
use chrono::Utc;
use std::path::Path;

pub fn handle(action: &ClientAction, ctx: &AppContext) -> AppResult<()> {
    let repo: Repository<Client> = Repository::new(&ctx.store, ctx.business);

    match action {
        ClientAction::Add {
            first_name,
            last_name,
            email,
            company,
            phone,
            client_type,
            status,
            website,
            address,
            notes,
        } => {
            let now = Utc::now().to_rfc3339();
            let client = Client {
                id: new_record_id(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                company: company.clone().unwrap_or_default(),
                email: email.clone(),
                phone: phone.clone().unwrap_or_default(),
                client_type: *client_type,
                status: *status,
                website: website.clone().unwrap_or_default(),
                address: address.clone().unwrap_or_default(),
                notes: notes.clone().unwrap_or_default(),
                projects: 0,
                total_revenue: 0.0,
                created_at: now.clone(),
                last_contact: now,
                business_type: ctx.business,
            };
            client.validate().map_err(AppError::Validation)?;
            repo.upsert(client)?;
            success("Client added successfully!");
            Ok(())
        }

        ClientAction::List { search, status } => {
            let mut clients = repo.load_all();
            if let Some(term) = search {
                clients = repo::search_clients(&clients, term);
            }
            if let Some(s) = status {
                clients = repo::filter_clients_by_status(&clients, *s);
            }
            render_clients(&clients, ctx);
            Ok(())
        }

        ClientAction::Import { file } => {
            let imported = exchange::import_clients_csv(Path::new(file), ctx.business)?;
            let mut clients = repo.load_all();
            let count = imported.len();
            clients.extend(imported);
            repo.save_all(&clients)?;
            success(format!("Successfully imported {count} clients!"));
            Ok(())
        }

        ClientAction::Export {
            format,
            file,
            force,
        } => {
            let path = Path::new(file);
            exchange::ensure_writable(path, *force)?;
            let clients = repo.load_all();
            match format {
                ExportFormat::Csv => exchange::export_clients_csv(path, &clients),
                ExportFormat::Xlsx => exchange::export_clients_xlsx(path, &clients, ctx.business),
                ExportFormat::Json => {
                    let json = serde_json::to_string_pretty(&clients)?;
                    std::fs::write(path, json)?;
                    success(format!("JSON export completed: {}", path.display()));
                    Ok(())
                }
            }
        }
    }
}

fn render_clients(clients: &[Client], ctx: &AppContext) {
    if clients.is_empty() {
        info("No clients found. Add your first client!");
        return;
    }

    // project counts and revenue come from the authoritative Project
    // collection, not the stored counters
    let projects: Vec<Project> =
        Repository::<Project>::new(&ctx.store, ctx.business).load_all();
    let currency = ctx.currency();

    let mut table = Table::new(vec![
        "Id", "Name", "Company", "Email", "Phone", "Type", "Status", "Projects", "Revenue",
    ]);
    for c in clients {
        let (count, revenue) = repo::client_stats(&projects, &c.full_name());
        table.add_row(vec![
            c.id.clone(),
            c.full_name(),
            c.company.clone(),
            c.email.clone(),
            c.phone.clone(),
            c.client_type.as_str().to_string(),
            c.status.as_str().to_string(),
            count.to_string(),
            format_currency(revenue, currency),
        ]);
    }
    print!("{}", table.render());
    info(format!("{} client(s)", clients.len()));
}
