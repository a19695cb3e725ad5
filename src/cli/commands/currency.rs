use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::prefs;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Currency { set } = cmd else {
        return Ok(());
    };

    match set {
        Some(currency) => {
            prefs::set_business_currency(&ctx.store, ctx.business, *currency)?;
            success(format!(
                "Currency for {} set to {}",
                ctx.business.display_name(),
                currency.code()
            ));
        }
        None => {
            let currency = ctx.currency();
            info(format!(
                "Currency for {}: {} ({})",
                ctx.business.display_name(),
                currency.code(),
                currency.symbol()
            ));
        }
    }
    Ok(())
}
