use std::env::VarError;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::HostError;

pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_APK_PATH: &str = "downloads/daanveer.apk";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const STAGING_PORT: u16 = 3100;

/// Where the site is served from and where it listens.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub dist_dir: PathBuf,
    pub apk_path: PathBuf,
    pub addr: SocketAddr,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds the config from any `std::env::var`-shaped lookup. An unset
    /// variable falls back to its default; a non-unicode one is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var = |key: &str| -> Result<Option<String>, HostError> {
            match lookup(key) {
                Ok(value) if value.trim().is_empty() => Ok(None),
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(e) => Err(e.into()),
            }
        };

        let dist_dir = var("SITE_DIST_DIR")?.unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());
        let apk_path = var("APK_PATH")?.unwrap_or_else(|| DEFAULT_APK_PATH.to_string());
        let host = var("HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("PORT")? {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| HostError::InvalidAddress(format!("port {:?}", port)))?,
            None => match var("ENVIRONMENT")?.as_deref() {
                Some("staging") => STAGING_PORT,
                _ => DEFAULT_PORT,
            },
        };

        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| HostError::InvalidAddress(format!("host {:?}", host)))?;

        Ok(Self {
            dist_dir: PathBuf::from(dist_dir),
            apk_path: PathBuf::from(apk_path),
            addr: SocketAddr::new(ip, port),
        })
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// The dist directory and its `index.html` must exist before serving.
    /// A missing APK only turns its download route into a 404.
    pub fn validate(&self) -> Result<(), HostError> {
        if !self.dist_dir.is_dir() {
            return Err(HostError::MissingDist(self.dist_dir.clone()));
        }
        if !self.index_path().is_file() {
            return Err(HostError::MissingIndex(self.dist_dir.clone()));
        }
        if !Path::new(&self.apk_path).is_file() {
            tracing::warn!(path = %self.apk_path.display(), "APK not found, downloads will 404");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.apk_path, PathBuf::from(DEFAULT_APK_PATH));
        assert_eq!(config.addr, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn staging_moves_the_default_port() {
        let config = HostConfig::from_lookup(lookup(&[("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.addr.port(), STAGING_PORT);
    }

    #[test]
    fn explicit_port_wins_over_environment() {
        let config =
            HostConfig::from_lookup(lookup(&[("ENVIRONMENT", "staging"), ("PORT", "8081")])).unwrap();
        assert_eq!(config.addr.port(), 8081);
    }

    #[test]
    fn bad_host_or_port_is_an_invalid_address() {
        let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, HostError::InvalidAddress(_)));

        let err = HostConfig::from_lookup(lookup(&[("HOST", "not-an-ip")])).unwrap_err();
        assert!(matches!(err, HostError::InvalidAddress(_)));
    }

    #[test]
    fn non_unicode_variable_is_an_env_error() {
        let err = HostConfig::from_lookup(|key: &str| {
            if key == "SITE_DIST_DIR" {
                Err(VarError::NotUnicode(Default::default()))
            } else {
                Err(VarError::NotPresent)
            }
        })
        .unwrap_err();
        assert!(matches!(err, HostError::Env(_)));
    }

    #[test]
    fn validate_reports_missing_dist_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = HostConfig::from_lookup(lookup(&[])).unwrap();

        config.dist_dir = dir.path().join("nope");
        assert!(matches!(config.validate(), Err(HostError::MissingDist(_))));

        config.dist_dir = dir.path().to_path_buf();
        assert!(matches!(config.validate(), Err(HostError::MissingIndex(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }
}
