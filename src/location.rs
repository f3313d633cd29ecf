//! Locations: validated, immutable points of a country.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::polar;

/// A named point in polar coordinates, either a depot or a settlement.
///
/// Fields are validated once in [`Location::new`] and never change
/// afterwards. Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationRecord")]
pub struct Location {
    name: String,
    region: String,
    r: f64,
    theta: f64,
    depot: bool,
}

impl Location {
    /// Build a location, title-casing `name` and `region`.
    ///
    /// A warning is logged for every field the normalization changed.
    pub fn new(
        name: impl AsRef<str>,
        region: impl AsRef<str>,
        r: f64,
        theta: f64,
        depot: bool,
    ) -> Result<Self> {
        let name = normalized_field("name", name.as_ref())?;
        let region = normalized_field("region", region.as_ref())?;

        if !r.is_finite() {
            return Err(PlannerError::validation(
                "r",
                format!("polar radius must be a finite number, got {r}"),
            ));
        }
        if r < 0.0 {
            return Err(PlannerError::validation(
                "r",
                format!("polar radius must be non-negative, got {r}"),
            ));
        }
        if !(-PI..=PI).contains(&theta) {
            return Err(PlannerError::validation(
                "theta",
                format!("polar angle must be between {} and {}, got {theta}", -PI, PI),
            ));
        }

        Ok(Self {
            name,
            region,
            r,
            theta,
            depot,
        })
    }

    /// Build a location from textual coordinates, e.g. `"5"` and `"0.1"`.
    ///
    /// Non-numeric text is rejected with a validation error on that field.
    pub fn parse(
        name: impl AsRef<str>,
        region: impl AsRef<str>,
        r: &str,
        theta: &str,
        depot: bool,
    ) -> Result<Self> {
        let r = parse_number("r", r)?;
        let theta = parse_number("theta", theta)?;
        Self::new(name, region, r, theta, depot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Polar radius in meters.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Polar angle in radians, within `[-pi, pi]`.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn is_depot(&self) -> bool {
        self.depot
    }

    pub fn is_settlement(&self) -> bool {
        !self.depot
    }

    pub fn polar(&self) -> (f64, f64) {
        (self.r, self.theta)
    }

    /// Straight-line distance in meters to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        polar::chord_distance(self.polar(), other.polar())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.depot { "depot" } else { "settlement" };
        write!(
            f,
            "{} [{}] in {} @ ({:.2} m, {:.2} pi)",
            self.name,
            label,
            self.region,
            self.r,
            self.theta / PI
        )
    }
}

/// Title-case `input`: the first letter of every run of letters is
/// upper-cased and the rest of the run lower-cased.
///
/// Returns the normalized text and whether it differs from the input.
pub fn title_case(input: &str) -> (String, bool) {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }

    let changed = output != input;
    (output, changed)
}

fn normalized_field(field: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(PlannerError::validation(field, "must be non-empty text"));
    }

    let (normalized, changed) = title_case(value);
    if changed {
        tracing::warn!(
            field,
            original = value,
            updated = %normalized,
            "location text was title-cased"
        );
    }
    Ok(normalized)
}

fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| PlannerError::validation(field, format!("must be a number, got {text:?}")))
}

/// A coordinate as it may appear in loaded data: a number or numeric text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn resolve(self, field: &'static str) -> Result<f64> {
        match self {
            Coordinate::Number(value) => Ok(value),
            Coordinate::Text(text) => parse_number(field, &text),
        }
    }
}

/// Unvalidated location as read from serialized input.
#[derive(Debug, Clone, Deserialize)]
struct LocationRecord {
    name: String,
    region: String,
    r: Coordinate,
    theta: Coordinate,
    depot: bool,
}

impl TryFrom<LocationRecord> for Location {
    type Error = PlannerError;

    fn try_from(record: LocationRecord) -> Result<Self> {
        let r = record.r.resolve("r")?;
        let theta = record.theta.resolve("theta")?;
        Location::new(record.name, record.region, r, theta, record.depot)
    }
}
