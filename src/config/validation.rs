use super::models::{Config, StorageBackend};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid public_url '{url}': {reason}")]
    InvalidPublicUrl { url: String, reason: String },

    #[error("Storage backend is fjall but no storage path is configured")]
    MissingStoragePath,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_public_url(config)?;
    validate_storage(config)?;
    Ok(())
}

/// The public URL must be an absolute http(s) URL
fn validate_public_url(config: &Config) -> Result<(), ValidationError> {
    let raw = &config.server.public_url;
    let invalid = |reason: String| ValidationError::InvalidPublicUrl {
        url: raw.clone(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}

fn validate_storage(config: &Config) -> Result<(), ValidationError> {
    if config.storage.backend == StorageBackend::Fjall && config.storage.path.as_os_str().is_empty() {
        return Err(ValidationError::MissingStoragePath);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use std::path::PathBuf;

    #[test]
    fn test_valid_config() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_public_url_scheme() {
        let mut config = Config::default();
        config.server.public_url = "ftp://quackly.example".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidPublicUrl { .. })
        ));

        config.server.public_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidPublicUrl { .. })
        ));

        config.server.public_url = "https://quackly.example/".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_fjall_requires_path() {
        let mut config = Config::default();
        config.storage.path = PathBuf::new();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::MissingStoragePath)
        ));

        config.storage = StorageConfig {
            path: PathBuf::new(),
            ..StorageConfig::memory()
        };
        assert!(validate(&config).is_ok());
    }
}
