use std::path::PathBuf;

use crate::config::{self, ProjectSettings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub base_path: PathBuf,
    pub template: String,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(base_path: Option<PathBuf>, template: String, json: bool) -> AppResult<Self> {
        let base_path = match base_path {
            Some(path) => config::expand_home(&path)?,
            None => std::env::current_dir()?,
        };
        let output = Output::new(json);

        Ok(Self {
            base_path,
            template,
            output,
        })
    }

    pub fn project(&self) -> AppResult<ProjectSettings> {
        ProjectSettings::with_template(self.base_path.clone(), &self.template)
    }
}
