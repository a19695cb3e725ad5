use crate::AppContext;
use crate::cli::parser::ProjectAction;
use crate::errors::{AppError, AppResult};
use crate::finance::{self, format_currency};
use crate::models::{ExpenseCategory, ExpenseEntry, Project, new_record_id};
use crate::repo::{self, Repository};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{format_display_date, parse_date};
use crate::utils::table::Table;
use std::collections::BTreeMap;

pub fn handle(action: &ProjectAction, ctx: &AppContext) -> AppResult<()> {
    let repo: Repository<Project> = Repository::new(&ctx.store, ctx.business);

    match action {
        ProjectAction::Add {
            client_name,
            client_phone,
            project_name,
            date,
            location,
            project_type,
            total_price,
            upfront_payment,
            currency,
            expenses,
            details,
            id,
        } => {
            if let Some(d) = date {
                parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            }

            let currency = currency.unwrap_or_else(|| ctx.currency());
            let mut expense_map = BTreeMap::new();
            for spec in expenses {
                let (category, entry) = parse_expense(spec, currency)?;
                expense_map.insert(category, entry);
            }

            let updating = id.as_deref().is_some_and(|i| repo.find_by_id(i).is_some());
            let project = Project {
                id: id.clone().unwrap_or_else(new_record_id),
                client_name: client_name.clone().unwrap_or_default(),
                client_phone: client_phone.clone().unwrap_or_default(),
                project_name: project_name.clone().unwrap_or_default(),
                project_date: date.clone().unwrap_or_default(),
                location: location.clone().unwrap_or_default(),
                project_type: project_type.clone().unwrap_or_default(),
                total_price: *total_price,
                upfront_payment: *upfront_payment,
                balance: 0.0,
                currency,
                expenses: expense_map,
                total_expenses: 0.0,
                project_details: details.clone().unwrap_or_default(),
                business_type: ctx.business,
                created_at: String::new(),
            };
            repo.upsert(project)?;

            if updating {
                success("Project updated successfully!");
            } else {
                success("Project added successfully!");
            }
            Ok(())
        }

        ProjectAction::List {
            search,
            project_type,
            status,
        } => {
            let mut projects = repo.load_all();
            if let Some(term) = search {
                projects = repo::search_projects(&projects, term);
            }
            if let Some(t) = project_type {
                projects = repo::filter_projects_by_type(&projects, t);
            }
            if let Some(s) = status {
                projects = repo::filter_projects_by_status(&projects, *s);
            }
            render_projects(&projects, ctx);
            Ok(())
        }

        ProjectAction::Del { id, yes } => {
            if !*yes {
                warning("Deleting a project cannot be undone; pass --yes to confirm.");
                return Ok(());
            }
            if repo.delete_by_id(id)? {
                success("Project deleted successfully!");
            } else {
                info(format!("No project with id {id}"));
            }
            Ok(())
        }
    }
}

/// `CATEGORY:AMOUNT[:CURRENCY]`, e.g. `transport:45` or `food:5000:MWK`.
fn parse_expense(
    spec: &str,
    default_currency: crate::models::Currency,
) -> AppResult<(ExpenseCategory, ExpenseEntry)> {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    let category = ExpenseCategory::from_name(name)
        .ok_or_else(|| AppError::Validation(format!("Unknown expense category: {name}")))?;
    let amount: f64 = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid expense amount in '{spec}'")))?;
    let currency = match parts.next() {
        Some(code) => crate::models::Currency::from_code(code)
            .ok_or_else(|| AppError::InvalidCurrency(code.to_string()))?,
        None => default_currency,
    };
    Ok((category, ExpenseEntry { amount, currency }))
}

fn render_projects(projects: &[Project], ctx: &AppContext) {
    if projects.is_empty() {
        info("No projects found. Add your first project!");
        return;
    }

    let mut table = Table::new(vec![
        "Id", "Client", "Phone", "Project", "Date", "Location", "Type", "Price", "Upfront",
        "Balance", "Expenses", "Status",
    ]);
    for p in projects {
        table.add_row(vec![
            p.id.clone(),
            or_na(&p.client_name),
            or_na(&p.client_phone),
            or_na(&p.project_name),
            format_display_date(&p.project_date),
            or_na(&p.location),
            p.type_label(),
            format_currency(p.total_price, p.currency),
            format_currency(p.upfront_payment, p.currency),
            format_currency(p.balance, p.currency),
            format_expenses(p),
            finance::status_of(p.balance, p.total_price).label().to_string(),
        ]);
    }
    print!("{}", table.render());
    info(format!(
        "{} project(s) for {}",
        projects.len(),
        ctx.business.display_name()
    ));
}

fn or_na(s: &str) -> String {
    if s.is_empty() { "N/A".to_string() } else { s.to_string() }
}

/// Non-zero expense entries joined in their own currencies, e.g.
/// `$40.00 + K5,000`.
fn format_expenses(p: &Project) -> String {
    let parts: Vec<String> = p
        .expenses
        .iter()
        .filter(|(_, e)| e.amount > 0.0)
        .map(|(_, e)| format_currency(e.amount, e.currency))
        .collect();
    if parts.is_empty() {
        format_currency(0.0, p.currency)
    } else {
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;

    #[test]
    fn expense_spec_with_explicit_currency_is_case_insensitive() {
        let (category, entry) = parse_expense("food:50:eur", Currency::Usd).unwrap();
        assert_eq!(category, ExpenseCategory::Food);
        assert_eq!(entry.amount, 50.0);
        assert_eq!(entry.currency, Currency::Eur);
    }

    #[test]
    fn expense_spec_without_currency_uses_the_default() {
        let (_, entry) = parse_expense("transport:40", Currency::Mwk).unwrap();
        assert_eq!(entry.currency, Currency::Mwk);
    }

    #[test]
    fn unknown_expense_currency_is_an_error_not_usd() {
        let err = parse_expense("food:50:euro", Currency::Usd).unwrap_err();
        assert!(matches!(err, AppError::InvalidCurrency(code) if code == "euro"));
    }

    #[test]
    fn unknown_category_and_bad_amount_are_rejected() {
        assert!(parse_expense("fuel:50", Currency::Usd).is_err());
        assert!(parse_expense("food:lots", Currency::Usd).is_err());
    }
}
