use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::probe;

use super::Settings;

const SETTINGS_KEY: &str = "redux";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    redux: Option<Value>,
}

/// Returns the `redux` section of the manifest, or `None` when the manifest
/// or the key is absent.
pub fn load_section(path: &Path) -> AppResult<Option<Settings>> {
    if !probe::file_exists(path) {
        return Ok(None);
    }

    let raw = probe::read_file(path)?;
    let manifest: Manifest = serde_json::from_str(&raw)?;
    match manifest.redux {
        None => Ok(None),
        Some(Value::Object(section)) => Ok(Some(section)),
        Some(_) => Err(AppError::Config(format!(
            "`{SETTINGS_KEY}` in {} must be a json object",
            path.display()
        ))),
    }
}
