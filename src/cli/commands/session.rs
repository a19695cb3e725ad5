use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::session;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::Login { username, role } => {
            let user = session::login(&ctx.store, username, role)?;
            success(format!("Logged in as {} ({})", user.username, user.role));
        }
        Commands::Logout => {
            session::logout(&ctx.store);
            success("Logged out");
        }
        Commands::Whoami => match session::current_user(&ctx.store) {
            Some(user) => {
                info(format!("{} ({})", user.username, user.role));
                if !user.login_time.is_empty() {
                    info(format!("Logged in since {}", user.login_time));
                }
            }
            None => info("Not logged in"),
        },
        _ => {}
    }
    Ok(())
}
