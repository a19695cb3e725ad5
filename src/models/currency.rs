//! Supported currencies and their display rules.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Stored as its ISO-style code string. Unknown codes found in old blobs
/// fall back to USD instead of failing the whole collection decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    #[default]
    Usd,
    Mwk,
    Gbp,
    Eur,
    Zar,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Mwk => "MWK",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Zar => "ZAR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Mwk => "K",
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Zar => "R",
        }
    }

    /// Kwacha amounts are conventionally shown without decimals.
    pub fn decimals(&self) -> usize {
        match self {
            Currency::Mwk => 0,
            _ => 2,
        }
    }

    /// Strict, case-insensitive parse of a user-supplied code. Unknown
    /// codes are rejected here; only stored blobs get the USD fallback.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "MWK" => Some(Currency::Mwk),
            "GBP" => Some(Currency::Gbp),
            "EUR" => Some(Currency::Eur),
            "ZAR" => Some(Currency::Zar),
            _ => None,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        match code.as_str() {
            "MWK" => Currency::Mwk,
            "GBP" => Currency::Gbp,
            "EUR" => Currency::Eur,
            "ZAR" => Currency::Zar,
            _ => Currency::Usd,
        }
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.code().to_string()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
