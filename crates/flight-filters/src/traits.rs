//! Core traits for the filter engine.
//!
//! This module defines the evaluation context, the generic filter operation,
//! and the `FlightFilter` trait every concrete filter implements.

use chrono::{Local, NaiveDateTime};
use flight_data::Flight;

/// Inputs a filter may depend on besides the flight itself.
///
/// The evaluation instant is explicit so that filtering is deterministic;
/// callers sample the clock once and reuse the context for every filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterContext {
    pub now: NaiveDateTime,
}

impl FilterContext {
    /// Sample the local wall clock.
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Evaluate against a fixed instant.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

/// Return the flights for which `predicate` holds, in their original order.
///
/// The input is never mutated; kept flights are cloned into a new `Vec`.
pub fn filter_flights<P>(flights: &[Flight], predicate: P) -> Vec<Flight>
where
    P: Fn(&Flight) -> bool,
{
    flights
        .iter()
        .filter(|&flight| predicate(flight))
        .cloned()
        .collect()
}

/// Core trait for filtering flights.
///
/// ## Design Note
/// - `Send + Sync` so a filter set can be shared across threads
/// - Implementors only decide `keep`; `apply` is the generic selection and is
///   rarely overridden
pub trait FlightFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Human-readable label describing which flights this filter removes
    fn description(&self) -> String;

    /// `true` if `flight` survives this filter.
    fn keep(&self, flight: &Flight, context: &FilterContext) -> bool;

    /// Apply this filter to a set of flights.
    fn apply(&self, flights: &[Flight], context: &FilterContext) -> Vec<Flight> {
        filter_flights(flights, |flight| self.keep(flight, context))
    }
}
