use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the configuration file and data directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data_dir.clone(), cli.test)?;
    Ok(())
}
