//! Per-business stored preferences.

use crate::errors::AppResult;
use crate::models::{BusinessType, Currency};
use crate::store::{KeyValueStore, Scope};

fn currency_key(business: BusinessType) -> String {
    format!("{}Currency", business.key_prefix())
}

/// Preferred display currency for a business context; the configured
/// default until one is stored.
pub fn business_currency(
    store: &KeyValueStore,
    business: BusinessType,
    fallback: Currency,
) -> Currency {
    store
        .load::<String>(&currency_key(business), Scope::Durable)
        .map(Currency::from)
        .unwrap_or(fallback)
}

pub fn set_business_currency(
    store: &KeyValueStore,
    business: BusinessType,
    currency: Currency,
) -> AppResult<()> {
    store.save(
        &currency_key(business),
        &currency.code().to_string(),
        Scope::Durable,
    )
}
