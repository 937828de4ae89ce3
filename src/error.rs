#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Voice not found: {0}")]
    VoiceNotFound(String),
}
