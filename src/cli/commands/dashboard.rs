use crate::AppContext;
use crate::errors::AppResult;
use crate::finance::{self, format_currency};
use crate::models::Project;
use crate::repo::Repository;
use crate::ui::messages::info;

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let projects: Vec<Project> =
        Repository::<Project>::new(&ctx.store, ctx.business).load_all();
    let currency = ctx.currency();
    let totals = finance::dashboard_totals(&projects, ctx.today);

    info(format!("Dashboard for {}", ctx.business.display_name()));
    println!("Total Revenue:    {}", format_currency(totals.total_revenue, currency));
    println!("Monthly Revenue:  {}", format_currency(totals.monthly_revenue, currency));
    println!("Total Projects:   {}", totals.total_projects);
    println!("Total Expenses:   {}", format_currency(totals.total_expenses, currency));
    println!("Total Profit:     {}", format_currency(totals.total_profit, currency));
    Ok(())
}
