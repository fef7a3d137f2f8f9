use astro_core::{Language, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON found in model response")]
    NoJson,
    #[error("invalid JSON in model response: {0}")]
    Decode(String),
}

/// Every way a generation call can fail. All variants are terminal for the
/// call; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("generation client not configured: {0}")]
    Configuration(String),
    #[error("remote generation failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("generated content failed validation: {0}")]
    Validation(#[from] ValidationError),
}

impl OracleError {
    /// The one message end users see, whatever went wrong.
    pub fn user_message(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => "We couldn't read the stars right now. Please try again.",
            Language::Th => "ไม่สามารถดูดวงได้ในขณะนี้ กรุณาลองใหม่อีกครั้ง",
        }
    }
}
