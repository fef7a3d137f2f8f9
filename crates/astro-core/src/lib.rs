pub mod generated;
pub mod zodiac;

pub use generated::{
    AspectKind, AuspiciousPeriod, ChartAspect, GeneratedCalendarInfo, GeneratedChart,
    GeneratedCompatibility, GeneratedReading, HousePlacement, PlanetPlacement, Validate,
    ValidationError,
};
pub use zodiac::{profiles, Element, Quality, SignProfile, ZodiacSign};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// --- Types ---

/// A name that did not match any known identifier of its kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownName {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Output language for generated content and localized reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    /// Resolve a language tag such as "th" or "th-TH". Anything that is not
    /// Thai falls back to English.
    pub fn from_tag(tag: &str) -> Language {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("th") {
            Language::Th
        } else {
            Language::En
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Birth details as entered by the user. Immutable once handed to a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl BirthRecord {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            time,
            location: location.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn sun_sign(&self) -> ZodiacSign {
        ZodiacSign::for_date(self.date)
    }
}

/// Clock times travel as "HH:MM". Seconds are accepted on input.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn format(time: &NaiveTime) -> String {
        time.format(FORMAT).to_string()
    }

    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid clock time {raw:?}: {e}")))
    }
}

// --- Settings ---

pub const DEFAULT_PROVIDER: &str = "google";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_VARS: [&str; 3] = ["ASTRO_ORACLE_API_KEY", "GEMINI_API_KEY", "VITE_GEMINI_API_KEY"];

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleSettings {
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
        }
    }
}

impl OracleSettings {
    /// Overlay process environment (after loading `.env`, if any) on top of
    /// `self`. Meant to be called once at startup.
    pub fn with_env(self) -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to load .env: {e}"),
        }
        self.overlay(|name| std::env::var(name).ok())
    }

    /// Overlay values from an arbitrary lookup. Empty values are ignored.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_VARS.iter().find_map(|name| get(*name)) {
            self.api_key = key;
        }
        if let Some(provider) = get("ASTRO_ORACLE_PROVIDER") {
            self.provider = provider;
        }
        if let Some(model) = get("ASTRO_ORACLE_MODEL") {
            self.model = model;
        }
        if let Some(url) = get("ASTRO_ORACLE_BASE_URL") {
            self.base_url = Some(url);
        }
        self
    }
}

/// Resolve the settings directory (~/.astro-oracle/).
pub fn settings_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".astro-oracle")
}

fn settings_path() -> PathBuf {
    settings_dir().join("settings.json")
}

pub fn read_settings() -> OracleSettings {
    read_settings_from(&settings_path())
}

/// Missing or unreadable files fall back to defaults.
pub fn read_settings_from(path: &Path) -> OracleSettings {
    if !path.exists() {
        return OracleSettings::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &OracleSettings) -> Result<(), SettingsError> {
    write_settings_to(&settings_path(), settings)
}

pub fn write_settings_to(path: &Path, settings: &OracleSettings) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn ai_configured(settings: &OracleSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record() -> BirthRecord {
        BirthRecord::new(
            "John Doe",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            "New York, NY, USA",
        )
    }

    #[test]
    fn language_tags_fall_back_to_english() {
        assert_eq!(Language::from_tag("th"), Language::Th);
        assert_eq!(Language::from_tag("TH-th"), Language::Th);
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("fr"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn birth_record_json_shape() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["date"], "1990-01-01");
        assert_eq!(json["time"], "12:00");
        assert!(json.get("latitude").is_none());

        let with_coords = record().with_coordinates(40.7, -74.0);
        let json = serde_json::to_value(&with_coords).unwrap();
        assert_eq!(json["latitude"], 40.7);
        assert_eq!(with_coords.coordinates(), Some((40.7, -74.0)));
    }

    #[test]
    fn birth_record_accepts_seconds() {
        let parsed: BirthRecord = serde_json::from_str(
            r#"{"name":"A","date":"1992-07-15","time":"14:45:30","location":"Chicago"}"#,
        )
        .unwrap();
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(14, 45, 30).unwrap());
        assert_eq!(parsed.sun_sign(), ZodiacSign::Cancer);
    }

    #[test]
    fn overlay_prefers_first_key_var_and_skips_blanks() {
        let env: HashMap<&str, &str> = [
            ("ASTRO_ORACLE_API_KEY", "  "),
            ("GEMINI_API_KEY", "gem-key"),
            ("VITE_GEMINI_API_KEY", "vite-key"),
            ("ASTRO_ORACLE_MODEL", "gemini-2.5-flash-lite"),
        ]
        .into_iter()
        .collect();

        let settings = OracleSettings::default().overlay(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.api_key, "gem-key");
        assert_eq!(settings.model, "gemini-2.5-flash-lite");
        assert_eq!(settings.provider, DEFAULT_PROVIDER);
        assert!(ai_configured(&settings));
    }

    #[test]
    fn configured_requires_key_except_ollama() {
        let mut settings = OracleSettings::default();
        assert!(!ai_configured(&settings));
        settings.provider = "ollama".to_string();
        assert!(ai_configured(&settings));
        settings.model.clear();
        assert!(!ai_configured(&settings));
    }

    #[test]
    fn settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        assert_eq!(read_settings_from(&path), OracleSettings::default());

        let settings = OracleSettings {
            api_key: "secret".to_string(),
            base_url: Some("http://localhost:11434".to_string()),
            ..OracleSettings::default()
        };
        write_settings_to(&path, &settings).unwrap();
        assert_eq!(read_settings_from(&path), settings);

        fs::write(&path, "not json").unwrap();
        assert_eq!(read_settings_from(&path), OracleSettings::default());
    }
}
