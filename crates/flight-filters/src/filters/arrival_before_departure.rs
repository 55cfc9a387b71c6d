//! Filter to remove flights with a leg that lands before it takes off.

use crate::time::whole_hours_between;
use crate::traits::{FilterContext, FlightFilter};
use flight_data::Flight;

/// Removes flights where any segment arrives before it departs.
///
/// A segment is rejected when departure minus arrival is at least one whole
/// hour; smaller inversions truncate to 0 and pass.
pub struct ArrivalBeforeDepartureFilter;

impl FlightFilter for ArrivalBeforeDepartureFilter {
    fn name(&self) -> &str {
        "ArrivalBeforeDepartureFilter"
    }

    fn description(&self) -> String {
        "Flights with an arrival earlier than departure removed".to_string()
    }

    fn keep(&self, flight: &Flight, _context: &FilterContext) -> bool {
        flight
            .segments()
            .iter()
            .all(|segment| whole_hours_between(segment.arrival(), segment.departure()) <= 0)
    }
}
