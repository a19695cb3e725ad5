//! medialedger library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod finance;
pub mod models;
pub mod prefs;
pub mod repo;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::{BusinessType, Currency};
use std::path::PathBuf;
use store::KeyValueStore;

/// Everything a command handler needs: the opened store, the explicit
/// business context, the configured fallback currency, and "today" for
/// period math.
pub struct AppContext {
    pub store: KeyValueStore,
    pub business: BusinessType,
    pub default_currency: Currency,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn build(cli: &Cli, cfg: &Config) -> Self {
        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| cfg.data_dir.clone());
        let business = cli.business.unwrap_or(cfg.default_business);
        Self {
            store: KeyValueStore::open(&PathBuf::from(data_dir)),
            business,
            default_currency: cfg.default_currency,
            today: Local::now().date_naive(),
        }
    }

    /// Display currency for the active business context: the stored
    /// `{prefix}Currency` preference, else the configured default.
    pub fn currency(&self) -> Currency {
        prefs::business_currency(&self.store, self.business, self.default_currency)
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init = &cli.command {
        return cli::commands::init::handle(cli);
    }

    let ctx = AppContext::build(cli, cfg);
    match &cli.command {
        Commands::Init => unreachable!(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Project { action } => cli::commands::project::handle(action, &ctx),
        Commands::Client { action } => cli::commands::client::handle(action, &ctx),
        Commands::Invoice { action } => cli::commands::invoice::handle(action, &ctx),
        Commands::Dashboard => cli::commands::dashboard::handle(&ctx),
        Commands::Analytics { .. } => cli::commands::analytics::handle(&cli.command, &ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &ctx),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, &ctx),
        Commands::Currency { .. } => cli::commands::currency::handle(&cli.command, &ctx),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            cli::commands::session::handle(&cli.command, &ctx)
        }
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, &ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load();
    dispatch(&cli, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn configured_default_currency_is_the_context_fallback() {
        let base = env::temp_dir().join("medialedger_ctx_currency");
        let _ = fs::remove_dir_all(&base);
        let data_dir = base.to_string_lossy().to_string();

        let cli =
            Cli::try_parse_from(["medialedger", "--data-dir", &data_dir, "dashboard"]).unwrap();
        let cfg = Config {
            data_dir: data_dir.clone(),
            default_business: BusinessType::DigitalFootprints,
            default_currency: Currency::Mwk,
        };
        let ctx = AppContext::build(&cli, &cfg);
        assert_eq!(ctx.currency(), Currency::Mwk);

        // a stored per-business preference still wins
        prefs::set_business_currency(&ctx.store, ctx.business, Currency::Gbp).unwrap();
        assert_eq!(ctx.currency(), Currency::Gbp);
    }
}
