//! Public conversion entry points.
//!
//! Both entry points run the same pipeline — lookup/validate the zone, parse
//! the timestamp, resolve to UTC — but the order of the checks and the
//! classification of resolution failures differ, and both are part of the
//! observable contract:
//!
//! - By airport: an unknown IATA code fails before the timestamp is even
//!   looked at, and any resolution failure is a timestamp problem, because
//!   the mapped zone is already known to be good.
//! - By zone: an unknown zone name fails before parsing, and a zone lookup
//!   failure during resolution is still reported as a timezone problem.

use chrono::{DateTime, Utc};

use crate::error::{ConvertError, Result};
use crate::mapping;
use crate::parse::parse_local;
use crate::resolver::{ResolveFailure, ZoneResolver};

/// IATA-to-zone lookup consumed by [`Converter::convert_to_utc`].
///
/// Defaults to the bundled OPTD snapshot; injectable for tests.
pub type ZoneLookup = fn(&str) -> Option<&'static str>;

/// Converts local civil timestamps to canonical UTC strings.
///
/// Owns the zone-validity cache through its [`ZoneResolver`], so repeated
/// conversions re-probe nothing. Construct one and reuse it.
pub struct Converter {
    resolver: ZoneResolver,
    lookup_zone: ZoneLookup,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// A converter over the bundled airport mapping and the compiled-in IANA
    /// database.
    pub fn new() -> Self {
        Self::with_parts(ZoneResolver::new(), mapping::lookup_zone)
    }

    /// A converter with an injected resolver (for a pre-seeded cache or a
    /// counting probe) and zone lookup.
    pub fn with_parts(resolver: ZoneResolver, lookup_zone: ZoneLookup) -> Self {
        Converter {
            resolver,
            lookup_zone,
        }
    }

    /// Convert a local timestamp at an airport into a UTC ISO string.
    ///
    /// # Arguments
    ///
    /// * `local_ts` — `"YYYY-MM-DDTHH:mm"` or `"YYYY-MM-DDTHH:mm:ss"`,
    ///   wall-clock time at the airport
    /// * `iata` — three-letter airport code
    ///
    /// # Errors
    ///
    /// [`ConvertError::UnknownAirport`] if `iata` is unmapped (checked before
    /// the timestamp); [`ConvertError::InvalidTimestamp`] if the timestamp
    /// fails validation or resolves to no real instant in the airport's zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use airport_utc::Converter;
    ///
    /// let converter = Converter::new();
    /// let utc = converter.convert_to_utc("2025-05-02T14:30", "JFK").unwrap();
    /// assert_eq!(utc, "2025-05-02T18:30:00Z");
    /// ```
    pub fn convert_to_utc(&self, local_ts: &str, iata: &str) -> Result<String> {
        let zone = (self.lookup_zone)(iata)
            .ok_or_else(|| ConvertError::UnknownAirport(iata.to_string()))?;
        let fields = parse_local(local_ts)?;

        // The zone came from the mapping, so it has already been proven
        // valid; whatever goes wrong from here is a timestamp problem.
        let utc = self.resolver.resolve_to_utc(fields, zone, |_| {
            ConvertError::InvalidTimestamp(local_ts.to_string())
        })?;
        Ok(format_utc(utc))
    }

    /// Convert a local timestamp in any IANA timezone into a UTC ISO string.
    ///
    /// # Errors
    ///
    /// [`ConvertError::UnknownTimezone`] if `zone` is not in the database
    /// (checked before the timestamp, and answered from the validity cache on
    /// repeat calls); [`ConvertError::InvalidTimestamp`] if the timestamp
    /// fails validation or resolves to no real instant in `zone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use airport_utc::Converter;
    ///
    /// let converter = Converter::new();
    /// let utc = converter
    ///     .convert_local_to_utc_by_zone("2025-05-02T14:30:00", "Europe/London")
    ///     .unwrap();
    /// assert_eq!(utc, "2025-05-02T13:30:00Z");
    /// ```
    pub fn convert_local_to_utc_by_zone(&self, local_ts: &str, zone: &str) -> Result<String> {
        self.resolver.assert_valid_zone(zone)?;
        let fields = parse_local(local_ts)?;

        // The zone passed validation, but that knowledge lives in the cache,
        // not in this call: a lookup failure inside resolution is still
        // reported as a timezone problem here.
        let utc = self
            .resolver
            .resolve_to_utc(fields, zone, |failure| match failure {
                ResolveFailure::ZoneLookup => ConvertError::UnknownTimezone(zone.to_string()),
                ResolveFailure::NoSuchInstant => {
                    ConvertError::InvalidTimestamp(local_ts.to_string())
                }
            })?;
        Ok(format_utc(utc))
    }
}

/// Render a UTC instant as `YYYY-MM-DDTHH:mm:ssZ` — second precision, no
/// fractional part, literal `Z` rather than a numeric offset.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ZoneResolver;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_convert_jfk_edt() {
        let converter = Converter::new();
        assert_eq!(
            converter.convert_to_utc("2025-05-02T14:30", "JFK").unwrap(),
            "2025-05-02T18:30:00Z"
        );
    }

    #[test]
    fn test_convert_jfk_est() {
        // January: EST, UTC-5.
        let converter = Converter::new();
        assert_eq!(
            converter.convert_to_utc("2025-01-15T09:00", "JFK").unwrap(),
            "2025-01-15T14:00:00Z"
        );
    }

    #[test]
    fn test_convert_unknown_airport_checked_before_parsing() {
        let probes = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&probes);
        let resolver = ZoneResolver::with_probe(Box::new(move |zone| {
            count.fetch_add(1, Ordering::SeqCst);
            zone.parse::<chrono_tz::Tz>().ok()
        }));
        let converter = Converter::with_parts(resolver, mapping::lookup_zone);

        // The timestamp is garbage, but the airport check comes first and
        // nothing downstream of it runs.
        let err = converter.convert_to_utc("not-a-timestamp", "ZZZ").unwrap_err();
        assert_eq!(err, ConvertError::UnknownAirport("ZZZ".to_string()));
        assert_eq!(probes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_convert_malformed_timestamp_by_airport() {
        let converter = Converter::new();
        let err = converter.convert_to_utc("invalid-format", "JFK").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidTimestamp("invalid-format".to_string())
        );
    }

    #[test]
    fn test_convert_gap_time_by_airport_is_timestamp_error() {
        // 02:30 on US spring-forward day does not exist at JFK; the zone is
        // known good, so the failure is classified as a timestamp problem.
        let converter = Converter::new();
        let err = converter.convert_to_utc("2025-03-09T02:30", "JFK").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidTimestamp("2025-03-09T02:30".to_string())
        );
    }

    #[test]
    fn test_convert_by_zone_london_bst() {
        let converter = Converter::new();
        assert_eq!(
            converter
                .convert_local_to_utc_by_zone("2025-05-02T14:30:00", "Europe/London")
                .unwrap(),
            "2025-05-02T13:30:00Z"
        );
    }

    #[test]
    fn test_convert_by_zone_leap_day_gmt() {
        let converter = Converter::new();
        assert_eq!(
            converter
                .convert_local_to_utc_by_zone("2024-02-29T12:00:00", "Europe/London")
                .unwrap(),
            "2024-02-29T12:00:00Z"
        );
    }

    #[test]
    fn test_convert_by_zone_unknown_zone_checked_before_parsing() {
        let converter = Converter::new();
        let err = converter
            .convert_local_to_utc_by_zone("not-a-timestamp", "Not/A_Zone")
            .unwrap_err();
        assert_eq!(err, ConvertError::UnknownTimezone("Not/A_Zone".to_string()));
    }

    #[test]
    fn test_convert_by_zone_repeat_failure_uses_cache() {
        let probes = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&probes);
        let resolver = ZoneResolver::with_probe(Box::new(move |zone| {
            count.fetch_add(1, Ordering::SeqCst);
            zone.parse::<chrono_tz::Tz>().ok()
        }));
        let converter = Converter::with_parts(resolver, mapping::lookup_zone);

        for _ in 0..2 {
            let err = converter
                .convert_local_to_utc_by_zone("2025-05-02T14:30:00", "Not/A_Zone")
                .unwrap_err();
            assert_eq!(err, ConvertError::UnknownTimezone("Not/A_Zone".to_string()));
        }
        assert_eq!(probes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_convert_by_zone_malformed_timestamp() {
        let converter = Converter::new();
        let err = converter
            .convert_local_to_utc_by_zone("bad-format", "Europe/London")
            .unwrap_err();
        assert_eq!(err, ConvertError::InvalidTimestamp("bad-format".to_string()));
    }

    #[test]
    fn test_convert_by_zone_half_hour_offset() {
        // India runs UTC+5:30 year round.
        let converter = Converter::new();
        assert_eq!(
            converter
                .convert_local_to_utc_by_zone("2025-05-02T14:30:00", "Asia/Kolkata")
                .unwrap(),
            "2025-05-02T09:00:00Z"
        );
    }

    #[test]
    fn test_format_utc_shape() {
        let instant = Utc.with_ymd_and_hms(2025, 5, 2, 18, 30, 0).unwrap();
        let rendered = format_utc(instant);
        assert_eq!(rendered, "2025-05-02T18:30:00Z");
        assert!(rendered.ends_with('Z'));
        assert!(!rendered.contains('+'));
        assert!(!rendered.contains('.'));
    }
}
