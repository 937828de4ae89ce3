pub mod voice;

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

pub use voice::{VoiceCategory, VoiceInfo, VoiceType};

/// Cache directory of the model whose snapshots ship voice embeddings.
const MODEL_DIR: &str = "models--nvidia--personaplex-7b-v1";

pub struct VoiceCatalog {
    config: CatalogConfig,
}

impl VoiceCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Catalog configured from `HF_HOME` / `CUSTOM_VOICE_DIR`, with the
    /// fixed defaults where those are unset.
    pub fn from_env() -> Self {
        Self::new(CatalogConfig::from_env())
    }

    /// All directories that may contain voice files, in scan order:
    /// the `voices` directory of each model snapshot first, the custom
    /// voices directory last. Directories that do not exist are omitted.
    pub fn voice_directories(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        if let Some(hub_dir) = self.config.hub_dir() {
            let snapshots = hub_dir.join(MODEL_DIR).join("snapshots");
            match fs::read_dir(&snapshots) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let voices_dir = entry.path().join("voices");
                        if voices_dir.exists() {
                            dirs.push(voices_dir);
                        }
                    }
                }
                Err(e) => {
                    tracing::debug!("No model snapshots under {}: {}", snapshots.display(), e);
                }
            }
        }

        let custom_dir = self.config.custom_dir();
        if custom_dir.exists() {
            dirs.push(custom_dir);
        }

        dirs
    }

    /// List every available voice, one record per unique filename.
    ///
    /// Only `.pt` embedding files are listed. When the same filename
    /// appears in several directories the first scanned wins. The result
    /// is sorted: custom voices first, then by category, then by name.
    pub fn list_voices(&self) -> Vec<VoiceInfo> {
        let mut voices = Vec::new();
        let mut seen_names = HashSet::new();

        for voice_dir in self.voice_directories() {
            let entries = match fs::read_dir(&voice_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::debug!("Skipping unreadable {}: {}", voice_dir.display(), e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if !path.extension().map(|e| e == "pt").unwrap_or(false) {
                    continue;
                }

                let name = entry.file_name().to_string_lossy().to_string();
                if seen_names.contains(&name) {
                    continue;
                }

                voices.push(VoiceInfo {
                    name: name.clone(),
                    voice_type: VoiceType::Embeddings,
                    category: VoiceCategory::from_filename(&name),
                    path: path.to_string_lossy().to_string(),
                });
                seen_names.insert(name);
            }
        }

        // Directory enumeration order is filesystem-dependent; the sort is
        // what makes the output deterministic.
        voices.sort_by(|a, b| {
            (a.category.sort_rank(), a.name.as_str())
                .cmp(&(b.category.sort_rank(), b.name.as_str()))
        });

        voices
    }

    /// Look up one voice by its exact filename.
    pub fn find_voice(&self, name: &str) -> Result<VoiceInfo, CatalogError> {
        self.list_voices()
            .into_iter()
            .find(|v| v.name == name)
            .ok_or_else(|| CatalogError::VoiceNotFound(name.to_string()))
    }
}
