//! The two business contexts every record is partitioned by.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A record belongs to exactly one business context for its whole lifetime.
/// The context is always passed explicitly; there is no process-wide
/// "current business" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BusinessType {
    #[serde(rename = "digitalFootprints")]
    #[value(name = "digital-footprints", alias = "df")]
    DigitalFootprints,

    #[serde(rename = "filmFixer")]
    #[value(name = "film-fixer", alias = "ff")]
    FilmFixer,
}

impl BusinessType {
    /// Prefix used to build storage keys, e.g. `digitalFootprintsProjects`.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            BusinessType::DigitalFootprints => "digitalFootprints",
            BusinessType::FilmFixer => "filmFixer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BusinessType::DigitalFootprints => "Digital Footprints Multimedia",
            BusinessType::FilmFixer => "Film Fixer Consultation",
        }
    }

    pub fn invoice_prefix(&self) -> &'static str {
        match self {
            BusinessType::DigitalFootprints => "DF",
            BusinessType::FilmFixer => "FF",
        }
    }

    /// Known project types for this context as `(stored value, label)` pairs.
    pub fn project_types(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            BusinessType::DigitalFootprints => &[
                ("photography", "Photography"),
                ("videography", "Videography"),
                ("design", "Graphic Design"),
                ("web", "Web Development"),
                ("branding", "Branding"),
                ("marketing", "Digital Marketing"),
                ("other", "Other"),
            ],
            BusinessType::FilmFixer => &[
                ("film", "Film Production"),
                ("documentary", "Documentary"),
                ("commercial", "Commercial"),
                ("music-video", "Music Video"),
                ("consulting", "Production Consulting"),
                ("location-scouting", "Location Scouting"),
                ("other", "Other"),
            ],
        }
    }

    /// Human label for a stored project type value. Unknown values pass
    /// through unchanged; an empty value renders as `N/A`.
    pub fn type_label(&self, value: &str) -> String {
        if value.is_empty() {
            return "N/A".to_string();
        }
        self.project_types()
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_label_maps_known_values() {
        assert_eq!(
            BusinessType::DigitalFootprints.type_label("web"),
            "Web Development"
        );
        assert_eq!(
            BusinessType::FilmFixer.type_label("music-video"),
            "Music Video"
        );
    }

    #[test]
    fn type_label_passes_unknown_through() {
        assert_eq!(BusinessType::FilmFixer.type_label("drone"), "drone");
        assert_eq!(BusinessType::FilmFixer.type_label(""), "N/A");
    }

    #[test]
    fn serde_uses_storage_names() {
        let json = serde_json::to_string(&BusinessType::DigitalFootprints).unwrap();
        assert_eq!(json, "\"digitalFootprints\"");
        let back: BusinessType = serde_json::from_str("\"filmFixer\"").unwrap();
        assert_eq!(back, BusinessType::FilmFixer);
    }
}
