use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const SETTINGS_FILE: &str = ".reduxrc";
pub const DEFAULT_TEMPLATE: &str = ".reduxrc";
pub const MANIFEST_FILE: &str = "package.json";
const TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Clone)]
pub struct ProjectPaths {
    base_dir: PathBuf,
    settings_file: PathBuf,
    manifest_file: PathBuf,
    template_file: PathBuf,
}

impl ProjectPaths {
    /// Templates always live under `<base>/templates/`; only the leaf name of
    /// `template_name` is kept.
    pub fn new(base_dir: impl Into<PathBuf>, template_name: &str) -> AppResult<Self> {
        let base_dir = base_dir.into();
        let leaf = Path::new(template_name).file_name().ok_or_else(|| {
            AppError::Config(format!("template name `{template_name}` has no file name"))
        })?;

        let settings_file = base_dir.join(SETTINGS_FILE);
        let manifest_file = base_dir.join(MANIFEST_FILE);
        let template_file = base_dir.join(TEMPLATES_DIR).join(leaf);

        Ok(Self {
            base_dir,
            settings_file,
            manifest_file,
            template_file,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    pub fn manifest_file(&self) -> &Path {
        &self.manifest_file
    }

    pub fn template_file(&self) -> &Path {
        &self.template_file
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> AppResult<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
    Ok(home.join(rest))
}
