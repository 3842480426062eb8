use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::File, path::Path, time::Duration};

use crate::wire::MessageFormat;

/// Run configuration, loaded from a YAML file or built from defaults that
/// match the historical constants (localhost:9999, 3 second pacing).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Path to the input CSV. First line is a header, remaining lines are
    /// data rows.
    pub input: String,
    /// Destination host for the datagrams.
    pub host: String,
    /// Destination port. Both known deployments use 9999.
    pub port: u16,
    /// Pause between sends, in whole seconds.
    pub interval_secs: u64,
    /// On-wire rendering of each row.
    pub format: MessageFormat,
    /// Optional side-channel file that records the header plus every
    /// transmitted row, comma-joined.
    pub echo: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            input: "batchfile_0_farenheit.csv".to_string(),
            host: "127.0.0.1".to_string(),
            port: 9999,
            interval_secs: 3,
            format: MessageFormat::Bracketed,
            echo: None,
        }
    }
}

impl FeedConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("failed to open config {}", path.as_ref().display()))?;
        let config: FeedConfig = serde_yaml::from_reader(file)
            .with_context(|| format!("failed to parse config {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// `host:port` in the form `UdpSocket::send_to` accepts.
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
