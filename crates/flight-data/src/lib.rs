//! # Flight Data Crate
//!
//! The data model for the flight filter engine.
//!
//! ## Main Components
//!
//! - **types**: `Segment` and `Flight`, immutable values with a canonical
//!   text form
//! - **parser**: read flights back from that canonical form
//! - **sample**: the fixed sample flight set used by the demo
//! - **error**: error types for construction and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use flight_data::{create_sample_flights, load_flights};
//!
//! let now = chrono::Local::now().naive_local();
//! let flights = create_sample_flights(now)?;
//! for flight in &flights {
//!     println!("{}", flight);
//! }
//!
//! let from_disk = load_flights(Path::new("flights.txt"))?;
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{FlightDataError, Result};
pub use types::{Flight, Segment, TIMESTAMP_FORMAT};
pub use parser::{EMPTY_FLIGHT, load_flights, parse_flights};
pub use sample::{create_flight, create_sample_flights};
