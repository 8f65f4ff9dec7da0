// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::config::LogConfig;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs the global console subscriber. `RUST_LOG`, when set, takes
/// precedence over the configured filters.
pub fn setup_logger(config: &LogConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::new()
                .with_target(true)
                .with_filter(get_env_filter(config)),
        )
        .try_init()?;
    Ok(())
}

fn get_env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.to_filter_string()))
}
