use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7878".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    /// Directory uploaded resumes are written to on commit. Created on
    /// first use, never cleaned up.
    #[serde(default = "default_upload_dir")]
    pub dir: PathBuf,
    /// Maximum number of staged resumes accepted by one batch commit.
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_batch: default_max_batch(),
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_batch() -> usize {
    10
}

impl Config {
    /// All-defaults configuration, used by tests and as the fallback when
    /// no config file exists.
    pub fn minimal() -> Self {
        Self {
            server: ServerConfig::default(),
            uploads: UploadsConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.uploads.max_batch == 0 {
        anyhow::bail!("uploads.max_batch must be > 0");
    }

    if config.server.bind.is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config_has_documented_defaults() {
        let cfg = Config::minimal();
        assert_eq!(cfg.uploads.max_batch, 10);
        assert_eq!(cfg.uploads.dir, PathBuf::from("uploads"));
        assert_eq!(cfg.server.bind, "127.0.0.1:7878");
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"").unwrap();
        let cfg = load_config(f.path()).unwrap();
        assert_eq!(cfg.uploads.max_batch, 10);
    }

    #[test]
    fn zero_max_batch_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"[uploads]\nmax_batch = 0\n").unwrap();
        assert!(load_config(f.path()).is_err());
    }
}
