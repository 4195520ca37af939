use std::sync::{Arc, Weak};

use derive_builder::{Builder, UninitializedFieldError};
use eyre::{Report, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{bits::Symbol, json_file::read_from_json_file};

use super::{
    dispatcher::InvocationDispatcher,
    multicast_delegate::{MulticastDelegate, DEFAULT_LABEL},
    responder::{DynamicObserver, Responder},
};

#[derive(Debug, Error)]
pub enum ConfigBuildError {
    #[error("Configuration missing or invalid `{0}`")]
    UninitializedField(&'static str),
    #[error("Configuration error `{0}`")]
    Other(String),
    #[error("Configuration file error: {0}")]
    FileError(String),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

impl From<UninitializedFieldError> for ConfigBuildError {
    fn from(err: UninitializedFieldError) -> Self {
        ConfigBuildError::UninitializedField(err.field_name())
    }
}

impl From<Report> for ConfigBuildError {
    fn from(report: Report) -> Self {
        ConfigBuildError::Other(format!("{:?}", report))
    }
}

fn default_label() -> Symbol {
    Symbol::from(DEFAULT_LABEL)
}

/// Settings shared by delegates built from this configuration.
///
/// The observer list itself is never part of configuration, it is supplied
/// when the delegate is built.
///
/// ```json
/// { "label": "table-view", "trace_invocations": true }
/// ```
#[derive(Clone, Builder, Serialize, Deserialize, Debug, PartialEq)]
#[builder(
    pattern = "owned",
    build_fn(name = "try_build", error = "ConfigBuildError")
)]
pub struct DelegateConfig {
    /// Name attached to every log line of the delegate
    #[builder(setter(into), default = "default_label()")]
    #[serde(default = "default_label")]
    pub label: Symbol,

    /// Log each observer visit at debug rather than trace level
    #[builder(default)]
    #[serde(default)]
    pub trace_invocations: bool,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            trace_invocations: false,
        }
    }
}

impl DelegateConfigBuilder {
    pub fn build(self) -> Result<DelegateConfig, ConfigBuildError> {
        let config = self.try_build()?;
        config.validate()?;
        Ok(config)
    }
}

impl DelegateConfig {
    #[must_use]
    pub fn builder() -> DelegateConfigBuilder {
        DelegateConfigBuilder::default()
    }

    pub fn load_from_json_file(path: &str) -> Result<Self, ConfigBuildError> {
        let config: Self = read_from_json_file(path)
            .map_err(|err| ConfigBuildError::FileError(format!("{}: {:?}", path, err)))?;

        config.validate()?;

        tracing::debug!(config_path = %path, label = %config.label, "Delegate configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigBuildError> {
        if self.label.trim().is_empty() {
            return Err(ConfigBuildError::ValidationError(
                "label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn build_delegate<T>(&self, observers: &[Arc<T>]) -> MulticastDelegate<T>
    where
        T: Responder + ?Sized,
    {
        self.build_delegate_with_observers(observers.iter().map(Arc::downgrade).collect())
    }

    pub fn build_delegate_with_observers<T>(&self, observers: Vec<Weak<T>>) -> MulticastDelegate<T>
    where
        T: Responder + ?Sized,
    {
        MulticastDelegate::new_with_label(self.label.clone(), self.trace_invocations, observers)
    }

    pub fn build_dispatcher(&self, observers: &[Arc<dyn DynamicObserver>]) -> InvocationDispatcher {
        InvocationDispatcher::new_with_delegate(self.build_delegate(observers))
    }
}
