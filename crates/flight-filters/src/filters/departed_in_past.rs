//! Filter to remove flights that have already departed.

use crate::time::whole_hours_between;
use crate::traits::{FilterContext, FlightFilter};
use flight_data::Flight;

/// Removes flights with any segment departing before the evaluation instant.
///
/// ## Algorithm
/// For each segment, take the whole hours from `now` to its departure. A
/// negative count means the leg has already left and the flight is dropped.
/// Departures less than an hour in the past truncate to 0 and are kept.
pub struct DepartedInPastFilter;

impl FlightFilter for DepartedInPastFilter {
    fn name(&self) -> &str {
        "DepartedInPastFilter"
    }

    fn description(&self) -> String {
        "Flights departing before the current moment removed".to_string()
    }

    fn keep(&self, flight: &Flight, context: &FilterContext) -> bool {
        flight
            .segments()
            .iter()
            .all(|segment| whole_hours_between(context.now, segment.departure()) >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{flight, hours, now};
    use chrono::Duration;

    #[test]
    fn test_departed_in_past_filter() {
        let base = now() + Duration::days(3);
        let flights = vec![
            flight(&[base, base + hours(2)]),
            flight(&[base - Duration::days(6), base]),
        ];

        let filtered = DepartedInPastFilter.apply(&flights, &FilterContext::at(now()));

        assert_eq!(filtered, vec![flights[0].clone()]);
    }

    #[test]
    fn test_any_past_segment_excludes_flight() {
        let t = now();
        let flights = vec![flight(&[
            t + hours(1),
            t + hours(2),
            t - hours(5),
            t - hours(4),
        ])];

        let filtered = DepartedInPastFilter.apply(&flights, &FilterContext::at(t));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_departure_at_now_is_kept() {
        let t = now();
        let flights = vec![flight(&[t, t + hours(2)])];

        let filtered = DepartedInPastFilter.apply(&flights, &FilterContext::at(t));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_hour_truncation() {
        let t = now();
        let flights = vec![
            flight(&[t - Duration::minutes(59), t + hours(1)]),
            flight(&[t - Duration::minutes(60), t + hours(1)]),
        ];

        let filtered = DepartedInPastFilter.apply(&flights, &FilterContext::at(t));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0], flights[0]);
    }

    #[test]
    fn test_empty_flight_is_kept() {
        let flights = vec![Flight::default()];
        let filtered = DepartedInPastFilter.apply(&flights, &FilterContext::at(now()));
        assert_eq!(filtered.len(), 1);
    }
}
