//! Filter engine for flight collections.
//!
//! This crate provides:
//! - FlightFilter trait and the generic `filter_flights` operation
//! - Filters for past departures, inverted segments and long ground time
//! - FilterPipeline for chaining filters or evaluating them side by side
//!
//! All filtering is pure: the input slice is never modified and the
//! evaluation instant is passed in through `FilterContext`.
//!
//! ## Example Usage
//! ```ignore
//! use flight_filters::{FilterContext, FilterPipeline};
//!
//! let context = FilterContext::now();
//! let pipeline = FilterPipeline::standard(2);
//!
//! for report in pipeline.apply_each(&flights, &context) {
//!     println!("{}: {} flights", report.description, report.flights.len());
//! }
//! ```

pub mod time;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::{FilterContext, FlightFilter, filter_flights};
pub use filter_pipeline::{FilterPipeline, FilterReport};
pub use time::whole_hours_between;
