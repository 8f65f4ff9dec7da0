// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::beacon::{ChainInfo, DrandConfig, DrandNetwork};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Environment variable holding a JSON [`DrandConfig`] that replaces the
/// built-in quicknet parameters.
pub const DRAND_QUICKNET_CONFIG_ENV: &str = "LOTTERY_DRAND_QUICKNET_CONFIG";

pub static DRAND_QUICKNET: LazyLock<DrandConfig<'static>> = LazyLock::new(|| {
    let default = DrandConfig {
        // https://api.drand.sh/52db9ba70e0cc0f6eaf7803dd07447a1f5477735fd3f661792ba94600c84e971/info
        chain_info: ChainInfo {
            public_key: Cow::Borrowed(
                "83cf0f2896adee7eb8b5f01fcad3912212c437e0073e911fb90022d3e760183c8c4b450b6a0a6c3ac6a5776a2d1064510d1fec758c921cc22b0e17e63aaf4bcb5ed66304de9cf809bd274ca73bab4af5a6e9c76a4bc09e76eae8991ef5ece45a",
            ),
            period: 3,
            genesis_time: 1692803367,
            hash: Cow::Borrowed("52db9ba70e0cc0f6eaf7803dd07447a1f5477735fd3f661792ba94600c84e971"),
            group_hash: Cow::Borrowed(
                "f477d5c89f21a17c863a7f937c6a6d15859414d2be09cd448d4279af331c5d3e",
            ),
        },
        network_type: DrandNetwork::Quicknet,
    };
    parse_drand_config_from_env_var(DRAND_QUICKNET_CONFIG_ENV).unwrap_or(default)
});

fn parse_drand_config_from_env_var<'a>(key: &str) -> Option<DrandConfig<'a>> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => match serde_json::from_str(&value) {
            Ok(config) => {
                tracing::warn!("overriding drand config with environment variable {key}");
                Some(config)
            }
            Err(error) => {
                tracing::warn!(%error, "failed to parse drand config set by environment variable {key}");
                None
            }
        },
        _ => None,
    }
}
