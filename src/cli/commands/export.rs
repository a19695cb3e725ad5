use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::exchange::{self, ExportFormat};
use crate::models::Project;
use crate::repo::Repository;
use std::path::Path;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let path = Path::new(file);
    exchange::ensure_writable(path, *force)?;
    let projects: Vec<Project> =
        Repository::<Project>::new(&ctx.store, ctx.business).load_all();
    match format {
        ExportFormat::Csv => exchange::export_projects_csv(path, &projects),
        ExportFormat::Json => exchange::export_projects_json(path, &projects),
        ExportFormat::Xlsx => exchange::export_projects_xlsx(path, &projects, ctx.business),
    }
}
