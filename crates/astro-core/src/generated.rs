//! Typed shapes of the content returned by the generative model.
//!
//! Field names follow the JSON the prompts ask for (camelCase). Values come
//! from a remote model, so every type carries a [`Validate`] impl that checks
//! the ranges the prompts promise.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{clock_time, BirthRecord, Element, ZodiacSign};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Post-decode checks for generated content.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn check_int(field: &str, value: u8, range: RangeInclusive<u8>) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("{value} outside {}..={}", range.start(), range.end()),
        ))
    }
}

/// Sign-relative degrees live in [0, 30).
fn check_degree(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..30.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, format!("{value} outside [0, 30)")))
    }
}

fn check_clock(field: &str, value: &str) -> Result<(), ValidationError> {
    clock_time::parse(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new(field, format!("{value:?} is not HH:MM ({e})")))
}

// --- Daily reading ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReading {
    pub sign: ZodiacSign,
    pub date: NaiveDate,
    pub overall: u8,
    pub love: u8,
    pub career: u8,
    pub health: u8,
    pub finances: u8,
    pub mood: String,
    pub advice: String,
    pub lucky_number: u8,
    pub lucky_color: String,
}

impl Validate for GeneratedReading {
    fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("overall", self.overall),
            ("love", self.love),
            ("career", self.career),
            ("health", self.health),
            ("finances", self.finances),
        ] {
            check_int(field, value, 1..=5)?;
        }
        check_int("luckyNumber", self.lucky_number, 1..=31)
    }
}

// --- Birth chart ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
}

impl AspectKind {
    pub const ALL: [AspectKind; 6] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
        AspectKind::Quincunx,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
            AspectKind::Quincunx => "quincunx",
        }
    }

    /// Nominal separation in degrees.
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }
}

impl TryFrom<String> for AspectKind {
    type Error = crate::UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let wanted = value.trim().to_lowercase();
        AspectKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| crate::UnknownName::new("aspect", &value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub name: String,
    pub sign: ZodiacSign,
    pub degree: f64,
    pub element: Element,
    #[serde(default)]
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePlacement {
    pub number: u8,
    pub sign: ZodiacSign,
    pub cusp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAspect {
    pub planet1: String,
    pub planet2: String,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedChart {
    pub id: String,
    pub birth_data: BirthRecord,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
    #[serde(default)]
    pub planets: Vec<PlanetPlacement>,
    #[serde(default)]
    pub houses: Vec<HousePlacement>,
    #[serde(default)]
    pub aspects: Vec<ChartAspect>,
}

impl GeneratedChart {
    pub fn planet(&self, name: &str) -> Option<&PlanetPlacement> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Validate for GeneratedChart {
    fn validate(&self) -> Result<(), ValidationError> {
        for (i, planet) in self.planets.iter().enumerate() {
            check_degree(&format!("planets[{i}].degree"), planet.degree)?;
        }
        for (i, house) in self.houses.iter().enumerate() {
            check_int(&format!("houses[{i}].number"), house.number, 1..=12)?;
            check_degree(&format!("houses[{i}].cusp"), house.cusp)?;
        }
        for (i, aspect) in self.aspects.iter().enumerate() {
            if !aspect.orb.is_finite() || aspect.orb < 0.0 {
                return Err(ValidationError::new(
                    format!("aspects[{i}].orb"),
                    format!("{} is negative", aspect.orb),
                ));
            }
        }
        Ok(())
    }
}

// --- Compatibility ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCompatibility {
    pub person_a: BirthRecord,
    pub person_b: BirthRecord,
    pub overall: u8,
    pub love: u8,
    pub communication: u8,
    pub trust: u8,
    pub values: u8,
    pub description: String,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
}

impl Validate for GeneratedCompatibility {
    fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("overall", self.overall),
            ("love", self.love),
            ("communication", self.communication),
            ("trust", self.trust),
            ("values", self.values),
        ] {
            check_int(field, value, 0..=100)?;
        }
        Ok(())
    }
}

// --- Calendar (panchang) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuspiciousPeriod {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCalendarInfo {
    pub date: NaiveDate,
    pub sunrise: String,
    pub sunset: String,
    pub moon_phase: String,
    pub nakshatra: String,
    pub tithi: String,
    pub yoga: String,
    pub karana: String,
    #[serde(default)]
    pub auspicious_periods: Vec<AuspiciousPeriod>,
}

impl Validate for GeneratedCalendarInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        check_clock("sunrise", &self.sunrise)?;
        check_clock("sunset", &self.sunset)?;
        for (i, period) in self.auspicious_periods.iter().enumerate() {
            check_clock(&format!("auspiciousPeriods[{i}].start"), &period.start)?;
            check_clock(&format!("auspiciousPeriods[{i}].end"), &period.end)?;
        }
        Ok(())
    }
}
