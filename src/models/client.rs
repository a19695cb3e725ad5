//! Client records, loosely linked to projects by name.

use super::BusinessType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    #[default]
    Individual,
    Company,
    Organization,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Individual => "individual",
            ClientType::Company => "company",
            ClientType::Organization => "organization",
        }
    }

    /// Lenient parse used by CSV import; anything unrecognized becomes the
    /// default, mirroring the permissive behavior of earlier imports.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "company" => ClientType::Company,
            "organization" => ClientType::Organization,
            _ => ClientType::Individual,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Vip,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Vip => "vip",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "inactive" => ClientStatus::Inactive,
            "vip" => ClientStatus::Vip,
            _ => ClientStatus::Active,
        }
    }
}

/// The stored `projects` / `totalRevenue` counters are denormalized and may
/// drift from the authoritative Project collection; listings report values
/// recomputed from projects instead (see `repo::client_stats`). The fields
/// stay on the struct so existing blobs and CSV interchange round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "type", default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub status: ClientStatus,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_contact: String,
    pub business_type: BusinessType,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Required fields for a new client: first name, last name, email, type
    /// (the type enum always carries a value, so three checks remain).
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.is_empty() || self.last_name.is_empty() || self.email.is_empty() {
            return Err("Please fill in all required fields".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_serializes_as_type() {
        let c = Client {
            id: "1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Phiri".to_string(),
            company: String::new(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            client_type: ClientType::Company,
            status: ClientStatus::Vip,
            website: String::new(),
            address: String::new(),
            notes: String::new(),
            projects: 0,
            total_revenue: 0.0,
            created_at: String::new(),
            last_contact: String::new(),
            business_type: BusinessType::FilmFixer,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"type\":\"company\""));
        assert!(json.contains("\"status\":\"vip\""));
        assert!(json.contains("\"totalRevenue\""));
    }

    #[test]
    fn validation_requires_names_and_email() {
        let mut c: Client = serde_json::from_str(
            r#"{"id":"1","businessType":"filmFixer"}"#,
        )
        .unwrap();
        assert!(c.validate().is_err());
        c.first_name = "A".to_string();
        c.last_name = "B".to_string();
        c.email = "a@b.c".to_string();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn lenient_enum_parsing_for_import() {
        assert_eq!(ClientType::from_str_or_default("weird"), ClientType::Individual);
        assert_eq!(ClientStatus::from_str_or_default("vip"), ClientStatus::Vip);
    }
}
