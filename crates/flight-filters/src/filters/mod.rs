//! Filter implementations for the flight filter engine.
//!
//! Each filter removes one kind of problematic flight and can be used on its
//! own or composed into a FilterPipeline.

pub mod arrival_before_departure;
pub mod departed_in_past;
pub mod excess_ground_time;

// Re-export for convenience
pub use arrival_before_departure::ArrivalBeforeDepartureFilter;
pub use departed_in_past::DepartedInPastFilter;
pub use excess_ground_time::{DEFAULT_MAX_GROUND_HOURS, ExcessGroundTimeFilter};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use flight_data::{Flight, create_flight};

    /// Fixed evaluation instant for tests.
    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    pub fn hours(n: i64) -> Duration {
        Duration::hours(n)
    }

    pub fn flight(dates: &[NaiveDateTime]) -> Flight {
        create_flight(dates).unwrap()
    }
}
