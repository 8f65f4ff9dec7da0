// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::beacon::{DrandBeacon, DrandConfig};
use crate::lottery::ClaimPolicy;
use crate::utils::io::{read_toml, read_toml_file};
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};
use tracing::level_filters::LevelFilter;

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevelFilter(pub LevelFilter);

impl TryFrom<String> for LogLevelFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Case insensitive.
        LevelFilter::from_str(&value)
            .map(LogLevelFilter)
            .map_err(|e| format!("invalid log level {value:?}: {e}"))
    }
}

impl From<LogLevelFilter> for String {
    fn from(value: LogLevelFilter) -> Self {
        value.0.to_string()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogConfig {
    pub filters: Vec<LogValue>,
}

impl LogConfig {
    pub(crate) fn to_filter_string(&self) -> String {
        self.filters
            .iter()
            .map(|f| format!("{}={}", f.module, f.level.0))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filters: vec![LogValue::new("lottery", LogLevelFilter(LevelFilter::INFO))],
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogValue {
    pub module: String,
    pub level: LogLevelFilter,
}

impl LogValue {
    pub fn new(module: &str, level: LogLevelFilter) -> Self {
        Self {
            module: module.to_string(),
            level,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub claim_policy: ClaimPolicy,
    pub drand: DrandConfig<'static>,
    pub log: LogConfig,
}

impl Config {
    pub fn from_toml_str(toml_string: &str) -> anyhow::Result<Self> {
        read_toml(toml_string)
    }

    pub fn read_file(path: &Path) -> anyhow::Result<Self> {
        read_toml_file(path)
    }

    /// Builds the beacon described by the `drand` section.
    pub fn beacon(&self) -> anyhow::Result<DrandBeacon> {
        DrandBeacon::new(&self.drand)
    }
}
