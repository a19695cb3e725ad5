use crate::AppContext;
use crate::analytics;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::finance::format_currency;
use crate::models::Project;
use crate::repo::Repository;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Analytics { period } = cmd else {
        return Ok(());
    };

    let projects: Vec<Project> =
        Repository::<Project>::new(&ctx.store, ctx.business).load_all();
    let currency = ctx.currency();
    let a = analytics::compute_analytics(&projects, *period, ctx.business, ctx.today);

    info(format!(
        "Analytics for {} ({})",
        ctx.business.display_name(),
        period.as_str()
    ));
    println!("Total Revenue:     {}", format_currency(a.total_revenue, currency));
    println!("Avg Project Value: {}", format_currency(a.average_project_value, currency));
    println!("Total Expenses:    {}", format_currency(a.total_expenses, currency));
    println!("Profit Margin:     {}%", a.profit_margin);
    println!("Total Clients:     {}", a.total_clients);
    println!("Repeat Clients:    {}", a.repeat_clients);
    println!("Popular Type:      {}", a.most_popular_type);
    println!("Project Types:     {}", a.total_types);

    if !a.revenue_data.is_empty() {
        println!();
        let mut table = Table::new(vec!["Period", "Revenue"]);
        for bucket in &a.revenue_data {
            table.add_row(vec![
                bucket.label.clone(),
                format_currency(bucket.revenue, currency),
            ]);
        }
        print!("{}", table.render());
    }

    if !a.project_type_data.is_empty() {
        println!();
        let mut table = Table::new(vec!["Type", "Projects", "Share"]);
        for share in &a.project_type_data {
            table.add_row(vec![
                share.label.clone(),
                share.count.to_string(),
                format!("{}%", share.percentage),
            ]);
        }
        print!("{}", table.render());
    }

    println!();
    let mut table = Table::new(vec!["Expense Category", "Total"]);
    for entry in &a.expense_data {
        table.add_row(vec![
            entry.category.label().to_string(),
            format_currency(entry.total, currency),
        ]);
    }
    print!("{}", table.render());

    if !a.top_clients.is_empty() {
        println!();
        let mut table = Table::new(vec!["Client", "Projects", "Revenue", "Avg Value"]);
        for c in &a.top_clients {
            table.add_row(vec![
                c.name.clone(),
                c.projects.to_string(),
                format_currency(c.revenue, currency),
                format_currency(c.avg_project_value, currency),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
