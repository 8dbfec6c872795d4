use std::fs;
use std::path::Path;
use anyhow::{Context as AnyhowContext, Result};
use serde::de::DeserializeOwned;
use crate::config::ReviewConfig;
use crate::provider::memory::Fixture;
use crate::session::UiCommand;

fn load_yaml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let yaml_content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read YAML file from {}", file_path.display()))?;

    serde_yaml::from_str(&yaml_content)
        .with_context(|| format!("Failed to deserialize YAML content from {}", file_path.display()))
}

pub fn load_config_from_yaml(file_path: &Path) -> Result<ReviewConfig> {
    load_yaml(file_path)
}

pub fn load_fixture_from_yaml(file_path: &Path) -> Result<Fixture> {
    load_yaml(file_path)
}

/// A replay script is a plain YAML list of commands.
pub fn load_script_from_yaml(file_path: &Path) -> Result<Vec<UiCommand>> {
    load_yaml(file_path)
}
