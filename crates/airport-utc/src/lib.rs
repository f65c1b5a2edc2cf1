//! # airport-utc
//!
//! Convert a local civil timestamp at a known airport (or in any IANA
//! timezone) into a UTC instant, and look up static geographic/timezone
//! metadata for airports by IATA code.
//!
//! The conversion pipeline is strict at every step: the timestamp grammar is
//! anchored ISO 8601 with independent calendar validation (no silent
//! field-overflow normalization), zone names are checked against the IANA
//! database with a sticky per-process validity cache, and DST transitions are
//! resolved from the zone database rather than offset arithmetic.
//!
//! ## Modules
//!
//! - [`parse`] — strict local-timestamp parsing and calendar validation
//! - [`resolver`] — zone validation (cached) and wall-clock-to-UTC resolution
//! - [`convert`] — the two public conversion entry points
//! - [`mapping`] — bundled IATA→timezone and IATA→geography tables
//! - [`info`] — airport metadata accessors
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use airport_utc::Converter;
//!
//! let converter = Converter::new();
//! assert_eq!(
//!     converter.convert_to_utc("2025-05-02T14:30", "JFK").unwrap(),
//!     "2025-05-02T18:30:00Z",
//! );
//! assert_eq!(
//!     converter
//!         .convert_local_to_utc_by_zone("2025-05-02T14:30:00", "Europe/London")
//!         .unwrap(),
//!     "2025-05-02T13:30:00Z",
//! );
//! ```

pub mod convert;
pub mod error;
pub mod info;
pub mod mapping;
pub mod parse;
pub mod resolver;

pub use convert::{format_utc, Converter};
pub use error::{ConvertError, Result};
pub use info::{airport_info, all_airports, Airport, AirportInfo};
pub use mapping::{lookup_geo, lookup_zone, GeoRecord};
pub use parse::{parse_local, LocalDateTimeFields};
pub use resolver::{ResolveFailure, ZoneProbe, ZoneResolver};
