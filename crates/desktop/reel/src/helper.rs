// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    io::{self, IsTerminal},
    path::Path,
    time::Duration,
};

use anyhow::Context as _;
use reel_common_telemetry::LoggingOptions;
use reel_player::{PlayerConfig, SourceDescriptor};

const FORCE_CLI_MODE_ENV_VAR_NAME: &str = "REEL_FORCE_CLI_MODE";
const LOG_DIR_ENV_VAR_NAME: &str = "REEL_LOG_DIR";
const CONFIG_ENV_VAR_NAME: &str = "REEL_PLAYER_CONFIG";

pub(crate) const DEFAULT_SOURCE: &str = "sim://sample";

pub(crate) fn stdout_is_a_pty() -> bool {
    std::env::var(FORCE_CLI_MODE_ENV_VAR_NAME).ok().is_none() && io::stdout().is_terminal()
}

pub(crate) fn logging_options() -> LoggingOptions {
    LoggingOptions::builder()
        .dir(std::env::var(LOG_DIR_ENV_VAR_NAME).unwrap_or_default())
        .append_stdout(stdout_is_a_pty())
        .build()
}

/// Player configuration for the demo window.
///
/// Reads the JSON file named by `REEL_PLAYER_CONFIG` when set, otherwise
/// uses demo defaults. `uri` overrides the configured source.
pub(crate) fn player_config(uri: Option<String>) -> anyhow::Result<PlayerConfig> {
    let path = std::env::var(CONFIG_ENV_VAR_NAME).ok();
    resolve_config(path.as_deref().map(Path::new), uri)
}

fn resolve_config(path: Option<&Path>, uri: Option<String>) -> anyhow::Result<PlayerConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => PlayerConfig::builder()
            .title("Sample clip")
            .source(SourceDescriptor::new(DEFAULT_SOURCE))
            .seek_color("#e91e63")
            .scrubbing(Duration::from_millis(500))
            .control_timeout(Duration::from_secs(5))
            .build(),
    };
    if let Some(uri) = uri {
        config.source = Some(SourceDescriptor::new(uri));
    }
    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> anyhow::Result<PlayerConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading player config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing player config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_overrides_source() {
        let config = resolve_config(None, Some("sim://fail".to_string())).unwrap();
        assert_eq!(config.source, Some(SourceDescriptor::new("sim://fail")));
        assert_eq!(config.title.as_deref(), Some("Sample clip"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/reel.json")).is_err());
    }
}
