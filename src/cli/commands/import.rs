use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::exchange;
use crate::models::Project;
use crate::repo::Repository;
use crate::ui::messages::success;
use std::path::Path;

/// Whole-state import replaces the project collection for the active
/// business context with the matching projects from the file.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Import { file } = cmd else {
        return Ok(());
    };

    let mut imported = exchange::import_state_json(Path::new(file), ctx.business)?;
    // balance/totalExpenses come from their sources, never from the file
    for project in &mut imported {
        project.recompute();
    }
    let repo: Repository<Project> = Repository::new(&ctx.store, ctx.business);
    let count = imported.len();
    repo.save_all(&imported)?;
    success(format!(
        "Imported {} project(s) into {}",
        count,
        ctx.business.display_name()
    ));
    Ok(())
}
