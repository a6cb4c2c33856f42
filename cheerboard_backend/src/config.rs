use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CheerboardConfig {
    pub api_port: u16,
    pub paths: CheerboardPaths,
}

impl CheerboardConfig {
    pub fn from_env() -> Result<Self> {
        let paths = match env::var("CHEERBOARD_DATA_DIR") {
            Ok(raw) if !raw.trim().is_empty() => CheerboardPaths::from_base_dir(raw.trim()),
            _ => CheerboardPaths::discover()?,
        };
        let api_port = env::var("CHEERBOARD_API_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5000);
        Ok(Self { api_port, paths })
    }

    pub fn new(api_port: u16, paths: CheerboardPaths) -> Self {
        Self { api_port, paths }
    }
}

#[derive(Debug, Clone)]
pub struct CheerboardPaths {
    pub base: PathBuf,
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl CheerboardPaths {
    pub fn discover() -> Result<Self> {
        let exe_path = env::current_exe()
            .map_err(|err| anyhow!("failed to resolve current executable: {err}"))?;
        let base = exe_path
            .parent()
            .ok_or_else(|| anyhow!("executable path missing parent"))?
            .to_path_buf();
        Ok(Self::from_base_dir(base))
    }

    pub fn from_base_dir<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref().to_path_buf();
        let data_dir = base.join("data");
        let db_path = data_dir.join("cheerboard.db");
        Self {
            base,
            data_dir,
            db_path,
        }
    }
}
