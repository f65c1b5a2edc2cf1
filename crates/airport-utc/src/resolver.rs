//! Zone validation and wall-clock-to-UTC resolution.
//!
//! The resolver owns a process-lifetime validity cache: a zone name that has
//! been probed once — successfully or not — is never probed again. Zone
//! validity cannot change while the process runs, so entries are append-only
//! and a racing duplicate write would store the identical value.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ConvertError, Result};
use crate::parse::LocalDateTimeFields;

/// Looks a zone name up in the IANA timezone database.
///
/// Injectable so tests can count probe invocations or substitute a canned
/// database.
pub type ZoneProbe = Box<dyn Fn(&str) -> Option<Tz> + Send + Sync>;

/// Why a low-level resolution attempt failed.
///
/// The resolver itself does not decide which [`ConvertError`] a failure maps
/// to — the same failure means different things depending on whether the
/// caller already proved the zone valid. Each entry point supplies its own
/// translation (see [`ZoneResolver::resolve_to_utc`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveFailure {
    /// The zone name was not found in the database during resolution.
    ZoneLookup,
    /// The wall-clock reading names no real instant in this zone, such as a
    /// time inside a spring-forward gap.
    NoSuchInstant,
}

/// Validates zone identifiers (with caching) and resolves local wall-clock
/// readings to absolute UTC instants.
pub struct ZoneResolver {
    cache: Mutex<HashMap<String, bool>>,
    probe: ZoneProbe,
}

impl Default for ZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneResolver {
    /// A resolver backed by the compiled-in IANA database, with an empty
    /// cache.
    pub fn new() -> Self {
        Self::with_probe(Box::new(|zone| zone.parse::<Tz>().ok()))
    }

    /// A resolver with a caller-supplied database probe.
    pub fn with_probe(probe: ZoneProbe) -> Self {
        ZoneResolver {
            cache: Mutex::new(HashMap::new()),
            probe,
        }
    }

    /// Pre-seed the validity cache, bypassing the probe for `zone`.
    pub fn seed(&self, zone: &str, valid: bool) {
        self.cache_mut().insert(zone.to_string(), valid);
    }

    /// Check that `zone` names a known timezone.
    ///
    /// The first call for a given name probes the database and caches the
    /// outcome; every later call — for a valid or an invalid name — is
    /// answered from the cache without re-probing.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownTimezone`] if the name is not in the
    /// database (or was cached as unknown earlier).
    pub fn assert_valid_zone(&self, zone: &str) -> Result<()> {
        let cached = self.cache_mut().get(zone).copied();
        let valid = match cached {
            Some(v) => v,
            None => {
                let v = (self.probe)(zone).is_some();
                self.cache_mut().insert(zone.to_string(), v);
                v
            }
        };
        if valid {
            Ok(())
        } else {
            Err(ConvertError::UnknownTimezone(zone.to_string()))
        }
    }

    /// Resolve a wall-clock reading in `zone` to the absolute UTC instant
    /// that produces that reading there.
    ///
    /// DST handling comes from the zone database, never from offset
    /// arithmetic: a reading inside a spring-forward gap fails with
    /// [`ResolveFailure::NoSuchInstant`], and an ambiguous fall-back reading
    /// resolves to the earlier of the two instants.
    ///
    /// # Errors
    ///
    /// Low-level failures are passed through `classify`, which the entry
    /// point uses to express whether the zone was already known to be valid
    /// at this call site.
    pub fn resolve_to_utc(
        &self,
        fields: LocalDateTimeFields,
        zone: &str,
        classify: impl Fn(ResolveFailure) -> ConvertError,
    ) -> Result<DateTime<Utc>> {
        let tz = (self.probe)(zone).ok_or_else(|| classify(ResolveFailure::ZoneLookup))?;
        let naive = fields
            .to_naive()
            .ok_or_else(|| classify(ResolveFailure::NoSuchInstant))?;

        let local = match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earlier, _) => earlier,
            LocalResult::None => return Err(classify(ResolveFailure::NoSuchInstant)),
        };
        Ok(local.with_timezone(&Utc))
    }

    fn cache_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, bool>> {
        // Writes are idempotent, so a poisoned lock still holds usable data.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
