//! The FilterPipeline orchestrates multiple filters.
//!
//! Filters can be chained (a flight must pass all of them) or evaluated
//! side by side, each against the same unfiltered input.

use crate::filters::{ArrivalBeforeDepartureFilter, DepartedInPastFilter, ExcessGroundTimeFilter};
use crate::traits::{FilterContext, FlightFilter};
use flight_data::Flight;
use serde::Serialize;

/// Result of evaluating one filter on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub name: String,
    pub description: String,
    pub flights: Vec<Flight>,
}

/// Holds an ordered set of filters.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DepartedInPastFilter)
///     .add_filter(ArrivalBeforeDepartureFilter)
///     .add_filter(ExcessGroundTimeFilter::new(2));
///
/// let context = FilterContext::now();
/// let valid = pipeline.apply(&flights, &context);
/// let reports = pipeline.apply_each(&flights, &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn FlightFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The three standard filters, in order: departed in the past, arrival
    /// before departure, excess ground time.
    pub fn standard(max_ground_hours: i64) -> Self {
        Self::new()
            .add_filter(DepartedInPastFilter)
            .add_filter(ArrivalBeforeDepartureFilter)
            .add_filter(ExcessGroundTimeFilter::new(max_ground_hours))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl FlightFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence; only flights passing every filter
    /// remain.
    pub fn apply(&self, flights: &[Flight], context: &FilterContext) -> Vec<Flight> {
        let mut current = flights.to_vec();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(&current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Evaluate every filter independently against the original `flights`.
    ///
    /// One report per filter, in the order the filters were added. A flight
    /// removed by one filter still reaches every other filter.
    pub fn apply_each(&self, flights: &[Flight], context: &FilterContext) -> Vec<FilterReport> {
        self.filters
            .iter()
            .map(|filter| {
                let kept = filter.apply(flights, context);
                tracing::debug!(
                    "Filter evaluated: {} (kept {} of {})",
                    filter.name(),
                    kept.len(),
                    flights.len()
                );
                FilterReport {
                    name: filter.name().to_string(),
                    description: filter.description(),
                    flights: kept,
                }
            })
            .collect()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
