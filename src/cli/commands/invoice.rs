use crate::AppContext;
use crate::cli::parser::InvoiceAction;
use crate::errors::{AppError, AppResult};
use crate::finance::format_currency;
use crate::models::{Invoice, InvoiceItem, new_record_id};
use crate::repo::{self, Repository};
use crate::ui::messages::{info, success};
use crate::utils::date::{format_display_date, parse_date};
use crate::utils::table::Table;

pub fn handle(action: &InvoiceAction, ctx: &AppContext) -> AppResult<()> {
    let repo: Repository<Invoice> = Repository::new(&ctx.store, ctx.business);

    match action {
        InvoiceAction::Create {
            client_name,
            email,
            phone,
            address,
            date,
            due_date,
            currency,
            items,
            tax,
            notes,
            project_id,
            number,
        } => {
            parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            parse_date(due_date).ok_or_else(|| AppError::InvalidDate(due_date.clone()))?;

            let currency = currency.unwrap_or_else(|| ctx.currency());
            let items: Vec<InvoiceItem> = items
                .iter()
                .map(|spec| parse_item(spec))
                .collect::<AppResult<_>>()?;

            let mut invoice = Invoice {
                id: new_record_id(),
                invoice_number: number
                    .clone()
                    .unwrap_or_else(|| Invoice::generate_number(ctx.business)),
                client_name: client_name.clone(),
                client_email: email.clone().unwrap_or_default(),
                client_phone: phone.clone().unwrap_or_default(),
                client_address: address.clone().unwrap_or_default(),
                date: date.clone(),
                due_date: due_date.clone(),
                currency,
                items,
                subtotal: 0.0,
                tax: *tax,
                total: 0.0,
                notes: notes.clone().unwrap_or_default(),
                project_id: project_id.clone().unwrap_or_default(),
                status: Default::default(),
                business_type: ctx.business,
                created_at: String::new(),
            };
            invoice.recompute();
            invoice.validate().map_err(AppError::Validation)?;

            let summary = format!(
                "Invoice {} created, total {}",
                invoice.invoice_number,
                format_currency(invoice.total, invoice.currency)
            );
            repo.upsert(invoice)?;
            success(summary);
            Ok(())
        }

        InvoiceAction::List { search, status } => {
            let mut invoices = repo.load_all();
            if let Some(term) = search {
                invoices = repo::search_invoices(&invoices, term);
            }
            if let Some(s) = status {
                invoices = repo::filter_invoices_by_status(&invoices, *s);
            }
            render_invoices(&invoices);
            Ok(())
        }
    }
}

/// `SERVICE:QTY:PRICE[:DESCRIPTION]`, e.g. `photography:2:150:Full day`.
fn parse_item(spec: &str) -> AppResult<InvoiceItem> {
    let mut parts = spec.splitn(4, ':');
    let service = parts.next().unwrap_or_default().to_string();
    if service.is_empty() {
        return Err(AppError::InvalidItem(spec.to_string()));
    }
    let quantity: f64 = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::InvalidItem(spec.to_string()))?;
    let price: f64 = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::InvalidItem(spec.to_string()))?;
    let description = parts.next().unwrap_or_default().to_string();
    Ok(InvoiceItem {
        service,
        description,
        quantity,
        price,
        total: 0.0,
    })
}

fn render_invoices(invoices: &[Invoice]) {
    if invoices.is_empty() {
        info("No invoices found. Create your first invoice!");
        return;
    }

    let mut table = Table::new(vec![
        "Number", "Client", "Date", "Due", "Items", "Subtotal", "Tax", "Total", "Status",
    ]);
    for inv in invoices {
        table.add_row(vec![
            inv.invoice_number.clone(),
            inv.client_name.clone(),
            format_display_date(&inv.date),
            format_display_date(&inv.due_date),
            inv.items.len().to_string(),
            format_currency(inv.subtotal, inv.currency),
            format_currency(inv.tax, inv.currency),
            format_currency(inv.total, inv.currency),
            inv.status.as_str().to_string(),
        ]);
    }
    print!("{}", table.render());
    info(format!("{} invoice(s)", invoices.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_spec_with_description() {
        let item = parse_item("photography:2:150:Full day shoot").unwrap();
        assert_eq!(item.service, "photography");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.price, 150.0);
        assert_eq!(item.description, "Full day shoot");
    }

    #[test]
    fn item_spec_without_description() {
        let item = parse_item("editing:3:40").unwrap();
        assert_eq!(item.description, "");
    }

    #[test]
    fn bad_item_specs_are_rejected() {
        assert!(parse_item("editing:three:40").is_err());
        assert!(parse_item(":2:40").is_err());
        assert!(parse_item("editing").is_err());
    }
}
