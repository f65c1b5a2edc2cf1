//! Airport metadata accessors over the static mapping tables.

use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::mapping;

/// Timezone plus geographic metadata for one airport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirportInfo {
    pub timezone: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub country_name: &'static str,
    pub continent: &'static str,
}

/// An [`AirportInfo`] together with the IATA code it was looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airport {
    pub iata: &'static str,
    #[serde(flatten)]
    pub info: AirportInfo,
}

/// Full metadata for an airport.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownAirport`] when the code is missing from
/// either the timezone or the geographic table — a code with only a timezone
/// row has no presentable record.
pub fn airport_info(iata: &str) -> Result<AirportInfo> {
    match (mapping::lookup_zone(iata), mapping::lookup_geo(iata)) {
        (Some(timezone), Some(geo)) => Ok(AirportInfo {
            timezone,
            latitude: geo.latitude,
            longitude: geo.longitude,
            name: geo.name,
            city: geo.city,
            country: geo.country,
            country_name: geo.country_name,
            continent: geo.continent,
        }),
        _ => Err(ConvertError::UnknownAirport(iata.to_string())),
    }
}

/// Every airport present in both tables, in IATA order.
pub fn all_airports() -> Vec<Airport> {
    mapping::mapped_codes()
        .filter_map(|iata| {
            airport_info(iata)
                .ok()
                .map(|info| Airport { iata, info })
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
