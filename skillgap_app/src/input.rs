//! Inventory and catalog files
//!
//! `.yaml` / `.yml` files are read as YAML, everything else as JSON. Both
//! hold a plain list of records.

use std::path::Path;

use serde::de::DeserializeOwned;
use skillgap_core::{Requirement, RequirementCatalog, Skill, SkillInventory};

use crate::error::{AppError, Result};

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref(),
        Some("yaml" | "yml")
    )
}

/// Decode `text` as the format implied by `path`.
pub fn parse<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    let decoded = if is_yaml(path) {
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(text).map_err(|e| e.to_string())
    };

    decoded.map_err(|reason| AppError::Input {
        path: path.to_path_buf(),
        reason,
    })
}

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| AppError::Input {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse(path, &text)
}

pub fn load_inventory(path: &Path) -> Result<SkillInventory> {
    let skills: Vec<Skill> = load(path)?;
    tracing::debug!("Loaded {} skills from {}", skills.len(), path.display());
    SkillInventory::try_from_records(skills).map_err(|e| AppError::Input {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn load_catalog(path: &Path) -> Result<RequirementCatalog> {
    let requirements: Vec<Requirement> = load(path)?;
    tracing::debug!("Loaded {} requirements from {}", requirements.len(), path.display());
    Ok(RequirementCatalog::from(requirements))
}
