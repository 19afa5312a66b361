use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::path::PathBuf;

/// Default request body cap: 10 MiB.
pub const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Where uploads are written and how large a request may be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl FromEnv for UploadConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let dir = PathBuf::from(env_or_default("UPLOAD_DIR", "uploads"));
        let max_bytes = env_parse_or("UPLOAD_MAX_BYTES", DEFAULT_MAX_BYTES)?;

        if max_bytes == 0 {
            return Err(ConfigError::ParseError {
                key: "UPLOAD_MAX_BYTES".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self { dir, max_bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(["UPLOAD_DIR", "UPLOAD_MAX_BYTES"], || {
            let config = UploadConfig::from_env().unwrap();
            assert_eq!(config, UploadConfig::default());
            assert_eq!(config.max_bytes, 10_485_760);
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("UPLOAD_DIR", Some("/var/lib/marketplace/files")),
                ("UPLOAD_MAX_BYTES", Some("2048")),
            ],
            || {
                let config = UploadConfig::from_env().unwrap();
                assert_eq!(config.dir, PathBuf::from("/var/lib/marketplace/files"));
                assert_eq!(config.max_bytes, 2048);
            },
        );
    }

    #[test]
    fn test_invalid_limit() {
        for value in ["lots", "0"] {
            temp_env::with_var("UPLOAD_MAX_BYTES", Some(value), || {
                assert!(UploadConfig::from_env().is_err());
            });
        }
    }
}
