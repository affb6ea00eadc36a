pub mod manifest;
pub mod paths;
pub mod settings;

pub use paths::{ProjectPaths, expand_home};
pub use settings::{ProjectSettings, Settings, SettingsSource};
