//! Catalog of voice embedding files discovered on the local filesystem.
//!
//! Voices come from two places: the snapshot directories of the PersonaPlex
//! model in the HuggingFace cache, and a user-supplied custom voices
//! directory. Only `.pt` embedding files are cataloged; `.wav` source audio
//! is an input for generating embeddings, not a voice.

mod catalog;
mod config;
mod error;

pub use catalog::{VoiceCatalog, VoiceCategory, VoiceInfo, VoiceType};
pub use config::CatalogConfig;
pub use error::CatalogError;
