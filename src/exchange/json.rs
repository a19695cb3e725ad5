//! Whole-state JSON interchange.

use super::notify_export_success;
use crate::errors::{AppError, AppResult};
use crate::models::{BusinessType, Project};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct StateFile {
    projects: Vec<Project>,
}

pub fn export_projects_json(path: &Path, projects: &[Project]) -> AppResult<()> {
    let state = StateFile {
        projects: projects.to_vec(),
    };
    let json = serde_json::to_string_pretty(&state)?;
    fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}

/// Read a whole-state file and keep only the projects belonging to the
/// given business context. The caller replaces its collection with the
/// result.
pub fn import_state_json(path: &Path, business: BusinessType) -> AppResult<Vec<Project>> {
    let content = fs::read_to_string(path)?;
    let state: StateFile =
        serde_json::from_str(&content).map_err(|e| AppError::Import(e.to_string()))?;
    Ok(state
        .projects
        .into_iter()
        .filter(|p| p.business_type == business)
        .collect())
}
