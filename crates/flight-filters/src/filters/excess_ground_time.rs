//! Filter to remove flights with long layovers.

use crate::time::whole_hours_between;
use crate::traits::{FilterContext, FlightFilter};
use flight_data::Flight;

/// Default ground time limit between consecutive legs, in whole hours
pub const DEFAULT_MAX_GROUND_HOURS: i64 = 2;

/// Removes flights where any stop between consecutive segments lasts longer
/// than `max_ground_hours`.
///
/// ## Algorithm
/// 1. Walk adjacent pairs (segment[n], segment[n+1])
/// 2. Ground time is the whole hours from segment[n] arrival to
///    segment[n+1] departure
/// 3. Drop the flight if any ground time is strictly greater than the limit
///
/// Flights with fewer than two segments have no stops and always pass.
pub struct ExcessGroundTimeFilter {
    max_ground_hours: i64,
}

impl ExcessGroundTimeFilter {
    /// Create a new ExcessGroundTimeFilter.
    ///
    /// # Arguments
    /// * `max_ground_hours` - Longest allowed stop, inclusive (typically 2)
    pub fn new(max_ground_hours: i64) -> Self {
        Self { max_ground_hours }
    }
}

impl Default for ExcessGroundTimeFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GROUND_HOURS)
    }
}

impl FlightFilter for ExcessGroundTimeFilter {
    fn name(&self) -> &str {
        "ExcessGroundTimeFilter"
    }

    fn description(&self) -> String {
        format!(
            "Flights with more than {} hours of ground time between segments removed",
            self.max_ground_hours
        )
    }

    fn keep(&self, flight: &Flight, _context: &FilterContext) -> bool {
        flight.segments().windows(2).all(|pair| {
            whole_hours_between(pair[0].arrival(), pair[1].departure()) <= self.max_ground_hours
        })
    }
}
