//! Parser for flights written in their canonical text form.
//!
//! Formats (the inverse of the `Display` impls in `types`):
//! - segment: `[yyyy-MM-ddTHH:mm|yyyy-MM-ddTHH:mm]`
//! - flight: segments separated by whitespace, or `[]` for a flight with no
//!   segments (its `Display` form is empty, which a flight file can't hold)
//! - flight file: one flight per line; blank lines and lines starting with `#`
//!   are skipped

use crate::error::{FlightDataError, Result};
use crate::types::{Flight, Segment, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Line marker for a flight without segments
pub const EMPTY_FLIGHT: &str = "[]";

fn parse_timestamp(s: &str, field: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        FlightDataError::parse(1, format!("Invalid {} timestamp '{}': {}", field, s, e))
    })
}

impl FromStr for Segment {
    type Err = FlightDataError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                FlightDataError::parse(1, format!("Segment '{}' must be enclosed in [ ]", s))
            })?;

        let (departure, arrival) = inner.split_once('|').ok_or_else(|| {
            FlightDataError::parse(1, format!("Segment '{}' is missing the '|' separator", s))
        })?;

        Ok(Segment::new(
            parse_timestamp(departure, "departure")?,
            parse_timestamp(arrival, "arrival")?,
        ))
    }
}

impl FromStr for Flight {
    type Err = FlightDataError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == EMPTY_FLIGHT {
            return Ok(Flight::default());
        }

        let segments = s
            .split_whitespace()
            .map(Segment::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Flight::new(segments))
    }
}

/// Parse a block of text holding one flight per line.
pub fn parse_flights(text: &str) -> Result<Vec<Flight>> {
    let mut flights = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let flight = line_trimmed
            .parse::<Flight>()
            .map_err(|e| e.at_line(line_no))?;
        flights.push(flight);
    }

    Ok(flights)
}

/// Read and parse a flight file.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>> {
    let text = fs::read_to_string(path)?;
    let flights = parse_flights(&text)?;
    tracing::info!("Loaded {} flights from {}", flights.len(), path.display());
    Ok(flights)
}
