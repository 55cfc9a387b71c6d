//! Core domain types: flights and the segments they are made of.
//!
//! Both types are immutable values. A `Flight` owns its segments exclusively
//! and keeps them in the order they were given, which is taken to be the
//! chronological leg order.

use crate::error::{FlightDataError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering pattern for timestamps: `yyyy-MM-ddTHH:mm`, minute precision,
/// no seconds and no zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

// =============================================================================
// Segment
// =============================================================================

/// One leg of a flight.
///
/// Nothing forces `arrival` to be after `departure`; such segments are
/// representable and are caught by the filter engine instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
}

impl Segment {
    pub fn new(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self { departure, arrival }
    }

    /// Build a segment from possibly-absent timestamps.
    ///
    /// # Errors
    /// `FlightDataError::InvalidArgument` if either timestamp is `None`.
    pub fn from_parts(
        departure: Option<NaiveDateTime>,
        arrival: Option<NaiveDateTime>,
    ) -> Result<Self> {
        let departure = departure.ok_or_else(|| {
            FlightDataError::InvalidArgument("segment departure is required".to_string())
        })?;
        let arrival = arrival.ok_or_else(|| {
            FlightDataError::InvalidArgument("segment arrival is required".to_string())
        })?;
        Ok(Self::new(departure, arrival))
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(TIMESTAMP_FORMAT),
            self.arrival.format(TIMESTAMP_FORMAT)
        )
    }
}

// =============================================================================
// Flight
// =============================================================================

/// A journey made of one or more ordered segments.
///
/// An empty flight is representable; every filter lets it through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Segments in leg order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Departure of the first leg, `None` for an empty flight.
    pub fn departure(&self) -> Option<NaiveDateTime> {
        self.segments.first().map(Segment::departure)
    }

    /// Arrival of the last leg, `None` for an empty flight.
    pub fn arrival(&self) -> Option<NaiveDateTime> {
        self.segments.last().map(Segment::arrival)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
