//! Fixed sample flights used by the demo driver and the tests.
//!
//! Everything is laid out relative to a base instant three days after the
//! supplied `now`, so the set keeps its meaning whenever it is built.

use crate::error::{FlightDataError, Result};
use crate::types::{Flight, Segment};
use chrono::{Duration, NaiveDateTime};

/// Build a flight from boundary timestamps: `[dep1, arr1, dep2, arr2, ...]`.
///
/// # Errors
/// `FlightDataError::InvalidArgument` if an odd number of timestamps is given.
pub fn create_flight(dates: &[NaiveDateTime]) -> Result<Flight> {
    if dates.len() % 2 != 0 {
        return Err(FlightDataError::InvalidArgument(format!(
            "an even number of dates is required, got {}",
            dates.len()
        )));
    }

    let segments = dates
        .chunks_exact(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect();
    Ok(Flight::new(segments))
}

/// The six sample flights, in this order:
/// 1. a normal flight with two hour duration
/// 2. a normal multi segment flight
/// 3. a flight departing in the past
/// 4. a flight that departs before it arrives
/// 5. a flight with more than two hours ground time
/// 6. another multi segment flight whose longest ground time is exactly two hours
pub fn create_sample_flights(now: NaiveDateTime) -> Result<Vec<Flight>> {
    let base = offset(now, Duration::days(3))?;
    let at = |hours: i64| offset(base, Duration::hours(hours));

    Ok(vec![
        create_flight(&[base, at(2)?])?,
        create_flight(&[base, at(2)?, at(3)?, at(5)?])?,
        create_flight(&[offset(base, Duration::days(-6))?, base])?,
        create_flight(&[base, at(-6)?])?,
        create_flight(&[base, at(2)?, at(5)?, at(6)?])?,
        create_flight(&[base, at(2)?, at(3)?, at(4)?, at(6)?, at(7)?])?,
    ])
}

fn offset(instant: NaiveDateTime, delta: Duration) -> Result<NaiveDateTime> {
    instant.checked_add_signed(delta).ok_or_else(|| {
        FlightDataError::InvalidArgument("sample base out of range".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_create_flight_pairs_dates() {
        let t = now();
        let h = Duration::hours;
        let flight = create_flight(&[t, t + h(1), t + h(2), t + h(3)]).unwrap();

        assert_eq!(flight.segment_count(), 2);
        assert_eq!(flight.segments()[1].departure(), t + Duration::hours(2));
        assert_eq!(flight.segments()[1].arrival(), t + Duration::hours(3));
    }

    #[test]
    fn test_create_flight_rejects_odd_count() {
        let t = now();
        let result = create_flight(&[t, t + Duration::hours(1), t + Duration::hours(2)]);
        assert!(matches!(result, Err(FlightDataError::InvalidArgument(_))));
    }

    #[test]
    fn test_create_flight_with_no_dates_is_empty() {
        let flight = create_flight(&[]).unwrap();
        assert_eq!(flight.segment_count(), 0);
    }

    #[test]
    fn test_sample_flights_shape() {
        let flights = create_sample_flights(now()).unwrap();
        let counts: Vec<usize> = flights.iter().map(Flight::segment_count).collect();
        assert_eq!(counts, vec![1, 2, 1, 1, 2, 3]);

        assert_eq!(flights[0].to_string(), "[2025-01-04T10:15|2025-01-04T12:15]");
        assert_eq!(flights[2].to_string(), "[2024-12-29T10:15|2025-01-04T10:15]");
    }

    #[test]
    fn test_sample_flights_out_of_range() {
        for instant in [NaiveDateTime::MAX, NaiveDateTime::MIN] {
            let result = create_sample_flights(instant);
            assert!(matches!(result, Err(FlightDataError::InvalidArgument(_))));
        }
    }
}
