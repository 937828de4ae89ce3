use std::path::PathBuf;

/// Cache home used when `HF_HOME` is unset, relative to the home directory.
const DEFAULT_CACHE_SUBDIR: &str = ".cache/huggingface";

/// Custom voices directory used when `CUSTOM_VOICE_DIR` is unset, relative
/// to the process working directory.
const DEFAULT_CUSTOM_DIR: &str = "./custom_voices";

/// Inputs for voice discovery.
///
/// Both fields are overrides; `None` selects the fixed default at
/// resolution time. Environment reads live here so that scanning stays a
/// pure function of the resolved directories and tests never have to touch
/// the process environment.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Overrides the HuggingFace cache home (`HF_HOME`).
    pub cache_home: Option<PathBuf>,
    /// Overrides the custom voices directory (`CUSTOM_VOICE_DIR`).
    pub custom_voice_dir: Option<PathBuf>,
}

impl CatalogConfig {
    /// Reads both overrides from the process environment.
    pub fn from_env() -> Self {
        Self {
            cache_home: std::env::var("HF_HOME").ok().map(PathBuf::from),
            custom_voice_dir: std::env::var("CUSTOM_VOICE_DIR").ok().map(PathBuf::from),
        }
    }

    /// The `hub` directory of the model cache, or `None` when no override
    /// is set and the home directory cannot be determined.
    pub fn hub_dir(&self) -> Option<PathBuf> {
        let cache_home = match &self.cache_home {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()?.join(DEFAULT_CACHE_SUBDIR),
        };
        Some(cache_home.join("hub"))
    }

    /// The custom voices directory, override or default.
    pub fn custom_dir(&self) -> PathBuf {
        self.custom_voice_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CUSTOM_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_dir_uses_cache_home_override() {
        let config = CatalogConfig {
            cache_home: Some(PathBuf::from("/tmp/hf")),
            custom_voice_dir: None,
        };
        assert_eq!(config.hub_dir(), Some(PathBuf::from("/tmp/hf/hub")));
    }

    #[test]
    fn custom_dir_uses_override() {
        let config = CatalogConfig {
            cache_home: None,
            custom_voice_dir: Some(PathBuf::from("/srv/voices")),
        };
        assert_eq!(config.custom_dir(), PathBuf::from("/srv/voices"));
    }

    #[test]
    fn custom_dir_defaults_to_relative_path() {
        let config = CatalogConfig::default();
        assert_eq!(config.custom_dir(), PathBuf::from("./custom_voices"));
    }
}
