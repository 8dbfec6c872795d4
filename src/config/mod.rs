pub mod loader;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use crate::model::Locale;
use crate::provider::http::HttpProvider;
use crate::provider::memory::InMemoryProvider;
use crate::provider::redis_provider::RedisProvider;
use crate::provider::{FlowListProvider, TaskListProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub source: SourceConfig,
}

/// 数据来源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        base_url: String,
        #[serde(default = "default_task_path")]
        task_path: String,
        #[serde(default = "default_flow_path")]
        flow_path: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    Redis {
        url: String,
        #[serde(default = "default_key_prefix")]
        key_prefix: String,
    },
    Fixture {
        path: PathBuf,
    },
}

fn default_page_size() -> usize {
    20
}

fn default_task_path() -> String {
    "/api/task".to_string()
}

fn default_flow_path() -> String {
    "/api/flowByTask".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_key_prefix() -> String {
    "flowscope".to_string()
}

pub struct Providers {
    pub tasks: Arc<dyn TaskListProvider>,
    pub flows: Arc<dyn FlowListProvider>,
}

impl SourceConfig {
    /// Builds the task and flow providers for this source.
    pub fn build(&self) -> Result<Providers> {
        match self {
            SourceConfig::Http { base_url, task_path, flow_path, timeout_secs } => {
                let provider = Arc::new(
                    HttpProvider::new(base_url, task_path, flow_path, Duration::from_secs(*timeout_secs))
                        .context("Failed to build HTTP client")?,
                );
                Ok(Providers { tasks: provider.clone(), flows: provider })
            }
            SourceConfig::Redis { url, key_prefix } => {
                let client = redis::Client::open(url.as_str())
                    .with_context(|| format!("Invalid Redis URL: {}", url))?;
                let provider = Arc::new(RedisProvider::new(client, key_prefix.clone()));
                Ok(Providers { tasks: provider.clone(), flows: provider })
            }
            SourceConfig::Fixture { path } => {
                let fixture = loader::load_fixture_from_yaml(path)?;
                let provider = Arc::new(InMemoryProvider::from_fixture(fixture));
                Ok(Providers { tasks: provider.clone(), flows: provider })
            }
        }
    }
}
