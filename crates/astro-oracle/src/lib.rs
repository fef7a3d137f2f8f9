pub mod engine;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod tracker;

pub use engine::{LlmGenerator, TextGenerator};
pub use error::{OracleError, ParseError};
pub use parse::JsonExtraction;
pub use tracker::{RequestToken, RequestTracker};

use std::fmt;
use std::sync::Arc;

use astro_core::{
    ai_configured, BirthRecord, GeneratedCalendarInfo, GeneratedChart, GeneratedCompatibility,
    GeneratedReading, Language, OracleSettings, Validate, ValidationError, ZodiacSign,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Client for generated astrology content.
///
/// Construct one explicitly and hand it to whatever needs it. A client
/// without a generator is "not configured": every call fails with
/// [`OracleError::Configuration`] before touching the network.
#[derive(Clone, Default)]
pub struct OracleClient {
    generator: Option<Arc<dyn TextGenerator>>,
    extraction: JsonExtraction,
}

impl fmt::Debug for OracleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleClient")
            .field("configured", &self.is_configured())
            .field("extraction", &self.extraction)
            .finish()
    }
}

impl OracleClient {
    /// Configured iff the settings carry a usable provider, model and key.
    pub fn from_settings(settings: &OracleSettings) -> Self {
        if !ai_configured(settings) {
            warn!(provider = %settings.provider, "no API key configured; generation disabled");
            return Self::unconfigured();
        }
        match LlmGenerator::new(settings.clone()) {
            Ok(generator) => Self::with_generator(Arc::new(generator)),
            Err(e) => {
                warn!("generation disabled: {e}");
                Self::unconfigured()
            }
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
            extraction: JsonExtraction::default(),
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn with_extraction(mut self, extraction: JsonExtraction) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Send `prompt`, pull the JSON object out of the reply and decode it.
    /// The result is returned as-is, without any shape checks.
    pub async fn generate(&self, prompt: &str) -> Result<Value, OracleError> {
        let Some(generator) = &self.generator else {
            return Err(OracleError::Configuration(
                "no generation credential configured".to_string(),
            ));
        };

        debug!(prompt_len = prompt.len(), "sending prompt");
        let raw = match generator.complete(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("generation failed: {e}");
                return Err(e);
            }
        };
        debug!(response_len = raw.len(), "received model output");

        match parse::parse_json_object(&raw, self.extraction) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("could not parse model output: {e}");
                Err(e.into())
            }
        }
    }

    async fn generate_typed<T>(&self, prompt: &str) -> Result<T, OracleError>
    where
        T: DeserializeOwned + Validate,
    {
        let value = self.generate(prompt).await?;
        let typed: T = serde_json::from_value(value)
            .map_err(|e| ValidationError::new("$", e.to_string()))?;
        if let Err(e) = typed.validate() {
            warn!("generated content rejected: {e}");
            return Err(e.into());
        }
        Ok(typed)
    }

    pub async fn generate_reading(
        &self,
        sign: ZodiacSign,
        date: NaiveDate,
        lang: Language,
    ) -> Result<GeneratedReading, OracleError> {
        self.generate_typed(&prompt::reading_prompt(sign, date, lang))
            .await
    }

    pub async fn generate_chart(
        &self,
        record: &BirthRecord,
        lang: Language,
    ) -> Result<GeneratedChart, OracleError> {
        self.generate_typed(&prompt::chart_prompt(record, lang)).await
    }

    pub async fn generate_compatibility(
        &self,
        a: &BirthRecord,
        b: &BirthRecord,
        lang: Language,
    ) -> Result<GeneratedCompatibility, OracleError> {
        self.generate_typed(&prompt::compatibility_prompt(a, b, lang))
            .await
    }

    pub async fn generate_calendar_info(
        &self,
        date: NaiveDate,
        location: &str,
        lang: Language,
    ) -> Result<GeneratedCalendarInfo, OracleError> {
        self.generate_typed(&prompt::calendar_prompt(date, location, lang))
            .await
    }

    /// Connectivity check. Never errors; false when unconfigured or when the
    /// trivial prompt does not round-trip.
    pub async fn probe(&self) -> bool {
        if !self.is_configured() {
            return false;
        }
        let ok = self.generate(prompt::PROBE_PROMPT).await.is_ok();
        info!(ok, "connectivity probe");
        ok
    }
}
