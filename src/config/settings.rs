use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::probe;

use super::manifest;
use super::paths::{DEFAULT_TEMPLATE, ProjectPaths};

pub type Settings = Map<String, Value>;

/// Where the settings held in memory were first loaded from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSource {
    Dotfile,
    Manifest,
    Template,
}

#[derive(Debug, Clone)]
pub struct ProjectSettings {
    paths: ProjectPaths,
    settings: Settings,
    source: SettingsSource,
}

impl ProjectSettings {
    pub fn load(base_path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_template(base_path, DEFAULT_TEMPLATE)
    }

    /// Resolves settings in order: the dotfile, the manifest's `redux`
    /// section, then a dotfile freshly copied from the template.
    pub fn with_template(base_path: impl Into<PathBuf>, template_name: &str) -> AppResult<Self> {
        let paths = ProjectPaths::new(base_path, template_name)?;
        debug!(
            settings = %paths.settings_file().display(),
            manifest = %paths.manifest_file().display(),
            template = %paths.template_file().display(),
            "resolved project paths"
        );

        let mut project = Self {
            paths,
            settings: Settings::new(),
            source: SettingsSource::Dotfile,
        };

        if project.settings_exist() {
            debug!("loading settings from dotfile; manifest section is not consulted");
            project.settings = read_settings(project.settings_path())?;
            return Ok(project);
        }

        if let Some(section) = manifest::load_section(project.manifest_path())? {
            debug!("loading settings from manifest section");
            project.settings = section;
            project.source = SettingsSource::Manifest;
            return Ok(project);
        }

        project.build_from_template()?;
        project.settings = read_settings(project.settings_path())?;
        project.source = SettingsSource::Template;
        Ok(project)
    }

    /// Overwrites the dotfile with the template without reading the old
    /// dotfile, then loads it. Works on a dotfile that no longer parses.
    pub fn reset_from_template(
        base_path: impl Into<PathBuf>,
        template_name: &str,
    ) -> AppResult<Self> {
        let paths = ProjectPaths::new(base_path, template_name)?;
        copy_template(&paths)?;
        Self::with_template(paths.base_dir().to_path_buf(), template_name)
    }

    pub fn base_path(&self) -> &Path {
        self.paths.base_dir()
    }

    pub fn settings_path(&self) -> &Path {
        self.paths.settings_file()
    }

    pub fn manifest_path(&self) -> &Path {
        self.paths.manifest_file()
    }

    pub fn template_path(&self) -> &Path {
        self.paths.template_file()
    }

    pub fn settings_exist(&self) -> bool {
        probe::file_exists(self.settings_path())
    }

    pub fn source(&self) -> SettingsSource {
        self.source
    }

    /// Copies the template over the dotfile, replacing any existing one.
    pub fn build_from_template(&self) -> AppResult<()> {
        copy_template(&self.paths)
    }

    pub fn get_setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn get_all_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_setting(&mut self, key: impl Into<String>, value: Value) {
        self.settings.insert(key.into(), value);
    }

    pub fn set_all_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn remove_setting(&mut self, key: &str) -> Option<Value> {
        self.settings.remove(key)
    }

    pub fn save(&self) -> AppResult<()> {
        let payload = serde_json::to_string_pretty(&self.settings)?;
        fs::write(self.settings_path(), payload)?;
        info!(settings = %self.settings_path().display(), "saved settings");
        Ok(())
    }
}

fn copy_template(paths: &ProjectPaths) -> AppResult<()> {
    let template = paths.template_file();
    if !probe::file_exists(template) {
        return Err(AppError::TemplateNotFound(template.to_path_buf()));
    }

    fs::copy(template, paths.settings_file())?;
    info!(
        template = %template.display(),
        settings = %paths.settings_file().display(),
        "built settings from template"
    );
    Ok(())
}

fn read_settings(path: &Path) -> AppResult<Settings> {
    let raw = probe::read_file(path)?;
    match serde_json::from_str(&raw)? {
        Value::Object(settings) => Ok(settings),
        _ => Err(AppError::Config(format!(
            "{} must contain a json object",
            path.display()
        ))),
    }
}
