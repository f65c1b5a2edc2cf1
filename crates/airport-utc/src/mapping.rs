//! Static IATA mapping tables.
//!
//! Snapshot derived from the OpenTravelData (OPTD) public POR file. The
//! conversion engine treats this module as an opaque, preloaded, read-only
//! provider: it only ever calls [`lookup_zone`]. The geographic table backs
//! the airport-info accessors and nothing else.
//!
//! Both tables are sorted by IATA code for binary search. A code can appear
//! in the timezone table without a geographic record (OPTD carries timezone
//! rows for some points of reference that lack usable coordinates).

/// Geographic metadata for one airport, straight from the OPTD columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub country_name: &'static str,
    pub continent: &'static str,
}

/// IANA timezone for an IATA code, or `None` when the code is unmapped.
pub fn lookup_zone(iata: &str) -> Option<&'static str> {
    ZONES
        .binary_search_by_key(&iata, |&(code, _)| code)
        .ok()
        .map(|i| ZONES[i].1)
}

/// Geographic record for an IATA code, or `None` when the code is unmapped.
pub fn lookup_geo(iata: &str) -> Option<&'static GeoRecord> {
    GEO.binary_search_by_key(&iata, |&(code, _)| code)
        .ok()
        .map(|i| &GEO[i].1)
}

/// Every IATA code in the timezone table, in sorted order.
pub fn mapped_codes() -> impl Iterator<Item = &'static str> {
    ZONES.iter().map(|&(code, _)| code)
}

static ZONES: &[(&str, &str)] = &[
    ("AKL", "Pacific/Auckland"),
    ("AMS", "Europe/Amsterdam"),
    ("ARN", "Europe/Stockholm"),
    ("ATL", "America/New_York"),
    ("BCN", "Europe/Madrid"),
    ("BKK", "Asia/Bangkok"),
    ("BOM", "Asia/Kolkata"),
    ("BOS", "America/New_York"),
    ("CDG", "Europe/Paris"),
    ("CPT", "Africa/Johannesburg"),
    ("DEL", "Asia/Kolkata"),
    ("DEN", "America/Denver"),
    ("DFW", "America/Chicago"),
    ("DOH", "Asia/Qatar"),
    ("DXB", "Asia/Dubai"),
    ("EZE", "America/Argentina/Buenos_Aires"),
    ("FRA", "Europe/Berlin"),
    ("GIG", "America/Sao_Paulo"),
    ("GRU", "America/Sao_Paulo"),
    ("HKG", "Asia/Hong_Kong"),
    ("HND", "Asia/Tokyo"),
    ("IST", "Europe/Istanbul"),
    ("JFK", "America/New_York"),
    ("JNB", "Africa/Johannesburg"),
    ("KEF", "Atlantic/Reykjavik"),
    ("LAX", "America/Los_Angeles"),
    ("LHR", "Europe/London"),
    ("MAD", "Europe/Madrid"),
    ("MEL", "Australia/Melbourne"),
    ("MEX", "America/Mexico_City"),
    ("MIA", "America/New_York"),
    ("NBO", "Africa/Nairobi"),
    ("NRT", "Asia/Tokyo"),
    ("ORD", "America/Chicago"),
    ("PEK", "Asia/Shanghai"),
    ("PER", "Australia/Perth"),
    ("SCL", "America/Santiago"),
    ("SEA", "America/Los_Angeles"),
    ("SFO", "America/Los_Angeles"),
    ("SIN", "Asia/Singapore"),
    ("SYD", "Australia/Sydney"),
    ("YUL", "America/Toronto"),
    ("YVR", "America/Vancouver"),
    ("YYZ", "America/Toronto"),
    ("ZRH", "Europe/Zurich"),
    // Rail station with a timezone row but no geographic record in OPTD.
    ("ZYR", "Europe/Brussels"),
];

static GEO: &[(&str, GeoRecord)] = &[
    ("AKL", GeoRecord { latitude: -37.0081, longitude: 174.7917, name: "Auckland Airport", city: "Auckland", country: "NZ", country_name: "New Zealand", continent: "OC" }),
    ("AMS", GeoRecord { latitude: 52.3086, longitude: 4.7639, name: "Amsterdam Airport Schiphol", city: "Amsterdam", country: "NL", country_name: "Netherlands", continent: "EU" }),
    ("ARN", GeoRecord { latitude: 59.6519, longitude: 17.9186, name: "Stockholm Arlanda Airport", city: "Stockholm", country: "SE", country_name: "Sweden", continent: "EU" }),
    ("ATL", GeoRecord { latitude: 33.6367, longitude: -84.4281, name: "Hartsfield-Jackson Atlanta International Airport", city: "Atlanta", country: "US", country_name: "United States", continent: "NA" }),
    ("BCN", GeoRecord { latitude: 41.2971, longitude: 2.0785, name: "Barcelona-El Prat Airport", city: "Barcelona", country: "ES", country_name: "Spain", continent: "EU" }),
    ("BKK", GeoRecord { latitude: 13.6811, longitude: 100.7472, name: "Suvarnabhumi Airport", city: "Bangkok", country: "TH", country_name: "Thailand", continent: "AS" }),
    ("BOM", GeoRecord { latitude: 19.0887, longitude: 72.8679, name: "Chhatrapati Shivaji Maharaj International Airport", city: "Mumbai", country: "IN", country_name: "India", continent: "AS" }),
    ("BOS", GeoRecord { latitude: 42.3643, longitude: -71.0052, name: "Logan International Airport", city: "Boston", country: "US", country_name: "United States", continent: "NA" }),
    ("CDG", GeoRecord { latitude: 49.0128, longitude: 2.5500, name: "Paris Charles de Gaulle Airport", city: "Paris", country: "FR", country_name: "France", continent: "EU" }),
    ("CPT", GeoRecord { latitude: -33.9648, longitude: 18.6017, name: "Cape Town International Airport", city: "Cape Town", country: "ZA", country_name: "South Africa", continent: "AF" }),
    ("DEL", GeoRecord { latitude: 28.5665, longitude: 77.1031, name: "Indira Gandhi International Airport", city: "Delhi", country: "IN", country_name: "India", continent: "AS" }),
    ("DEN", GeoRecord { latitude: 39.8617, longitude: -104.6731, name: "Denver International Airport", city: "Denver", country: "US", country_name: "United States", continent: "NA" }),
    ("DFW", GeoRecord { latitude: 32.8968, longitude: -97.0380, name: "Dallas/Fort Worth International Airport", city: "Dallas", country: "US", country_name: "United States", continent: "NA" }),
    ("DOH", GeoRecord { latitude: 25.2731, longitude: 51.6081, name: "Hamad International Airport", city: "Doha", country: "QA", country_name: "Qatar", continent: "AS" }),
    ("DXB", GeoRecord { latitude: 25.2528, longitude: 55.3644, name: "Dubai International Airport", city: "Dubai", country: "AE", country_name: "United Arab Emirates", continent: "AS" }),
    ("EZE", GeoRecord { latitude: -34.8222, longitude: -58.5358, name: "Ministro Pistarini International Airport", city: "Buenos Aires", country: "AR", country_name: "Argentina", continent: "SA" }),
    ("FRA", GeoRecord { latitude: 50.0333, longitude: 8.5706, name: "Frankfurt Airport", city: "Frankfurt", country: "DE", country_name: "Germany", continent: "EU" }),
    ("GIG", GeoRecord { latitude: -22.8100, longitude: -43.2506, name: "Rio de Janeiro-Galeao International Airport", city: "Rio de Janeiro", country: "BR", country_name: "Brazil", continent: "SA" }),
    ("GRU", GeoRecord { latitude: -23.4356, longitude: -46.4731, name: "Sao Paulo-Guarulhos International Airport", city: "Sao Paulo", country: "BR", country_name: "Brazil", continent: "SA" }),
    ("HKG", GeoRecord { latitude: 22.3089, longitude: 113.9146, name: "Hong Kong International Airport", city: "Hong Kong", country: "HK", country_name: "Hong Kong", continent: "AS" }),
    ("HND", GeoRecord { latitude: 35.5523, longitude: 139.7798, name: "Tokyo Haneda Airport", city: "Tokyo", country: "JP", country_name: "Japan", continent: "AS" }),
    ("IST", GeoRecord { latitude: 41.2753, longitude: 28.7519, name: "Istanbul Airport", city: "Istanbul", country: "TR", country_name: "Turkey", continent: "EU" }),
    ("JFK", GeoRecord { latitude: 40.6398, longitude: -73.7789, name: "John F. Kennedy International Airport", city: "New York", country: "US", country_name: "United States", continent: "NA" }),
    ("JNB", GeoRecord { latitude: -26.1392, longitude: 28.2460, name: "O. R. Tambo International Airport", city: "Johannesburg", country: "ZA", country_name: "South Africa", continent: "AF" }),
    ("KEF", GeoRecord { latitude: 63.9850, longitude: -22.6056, name: "Keflavik International Airport", city: "Reykjavik", country: "IS", country_name: "Iceland", continent: "EU" }),
    ("LAX", GeoRecord { latitude: 33.9425, longitude: -118.4081, name: "Los Angeles International Airport", city: "Los Angeles", country: "US", country_name: "United States", continent: "NA" }),
    ("LHR", GeoRecord { latitude: 51.4775, longitude: -0.4614, name: "London Heathrow Airport", city: "London", country: "GB", country_name: "United Kingdom", continent: "EU" }),
    ("MAD", GeoRecord { latitude: 40.4936, longitude: -3.5668, name: "Adolfo Suarez Madrid-Barajas Airport", city: "Madrid", country: "ES", country_name: "Spain", continent: "EU" }),
    ("MEL", GeoRecord { latitude: -37.6733, longitude: 144.8433, name: "Melbourne Airport", city: "Melbourne", country: "AU", country_name: "Australia", continent: "OC" }),
    ("MEX", GeoRecord { latitude: 19.4363, longitude: -99.0721, name: "Mexico City International Airport", city: "Mexico City", country: "MX", country_name: "Mexico", continent: "NA" }),
    ("MIA", GeoRecord { latitude: 25.7932, longitude: -80.2906, name: "Miami International Airport", city: "Miami", country: "US", country_name: "United States", continent: "NA" }),
    ("NBO", GeoRecord { latitude: -1.3192, longitude: 36.9278, name: "Jomo Kenyatta International Airport", city: "Nairobi", country: "KE", country_name: "Kenya", continent: "AF" }),
    ("NRT", GeoRecord { latitude: 35.7647, longitude: 140.3864, name: "Narita International Airport", city: "Tokyo", country: "JP", country_name: "Japan", continent: "AS" }),
    ("ORD", GeoRecord { latitude: 41.9786, longitude: -87.9048, name: "O'Hare International Airport", city: "Chicago", country: "US", country_name: "United States", continent: "NA" }),
    ("PEK", GeoRecord { latitude: 40.0801, longitude: 116.5846, name: "Beijing Capital International Airport", city: "Beijing", country: "CN", country_name: "China", continent: "AS" }),
    ("PER", GeoRecord { latitude: -31.9403, longitude: 115.9669, name: "Perth Airport", city: "Perth", country: "AU", country_name: "Australia", continent: "OC" }),
    ("SCL", GeoRecord { latitude: -33.3928, longitude: -70.7858, name: "Arturo Merino Benitez International Airport", city: "Santiago", country: "CL", country_name: "Chile", continent: "SA" }),
    ("SEA", GeoRecord { latitude: 47.4490, longitude: -122.3093, name: "Seattle-Tacoma International Airport", city: "Seattle", country: "US", country_name: "United States", continent: "NA" }),
    ("SFO", GeoRecord { latitude: 37.6189, longitude: -122.3750, name: "San Francisco International Airport", city: "San Francisco", country: "US", country_name: "United States", continent: "NA" }),
    ("SIN", GeoRecord { latitude: 1.3502, longitude: 103.9944, name: "Singapore Changi Airport", city: "Singapore", country: "SG", country_name: "Singapore", continent: "AS" }),
    ("SYD", GeoRecord { latitude: -33.9461, longitude: 151.1772, name: "Sydney Kingsford Smith Airport", city: "Sydney", country: "AU", country_name: "Australia", continent: "OC" }),
    ("YUL", GeoRecord { latitude: 45.4706, longitude: -73.7408, name: "Montreal-Trudeau International Airport", city: "Montreal", country: "CA", country_name: "Canada", continent: "NA" }),
    ("YVR", GeoRecord { latitude: 49.1939, longitude: -123.1844, name: "Vancouver International Airport", city: "Vancouver", country: "CA", country_name: "Canada", continent: "NA" }),
    ("YYZ", GeoRecord { latitude: 43.6772, longitude: -79.6306, name: "Toronto Pearson International Airport", city: "Toronto", country: "CA", country_name: "Canada", continent: "NA" }),
    ("ZRH", GeoRecord { latitude: 47.4647, longitude: 8.5492, name: "Zurich Airport", city: "Zurich", country: "CH", country_name: "Switzerland", continent: "EU" }),
];

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_for_binary_search() {
        assert!(ZONES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(GEO.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_lookup_zone_hit_and_miss() {
        assert_eq!(lookup_zone("JFK"), Some("America/New_York"));
        assert_eq!(lookup_zone("LHR"), Some("Europe/London"));
        assert_eq!(lookup_zone("ZZZ"), None);
        assert_eq!(lookup_zone(""), None);
    }

    #[test]
    fn test_lookup_geo_hit_and_miss() {
        let jfk = lookup_geo("JFK").unwrap();
        assert_eq!(jfk.city, "New York");
        assert_eq!(jfk.continent, "NA");
        assert_eq!(lookup_geo("ZZZ"), None);
    }

    #[test]
    fn test_zone_only_entry_has_no_geo() {
        assert!(lookup_zone("ZYR").is_some());
        assert!(lookup_geo("ZYR").is_none());
    }

    #[test]
    fn test_every_mapped_zone_is_a_real_iana_name() {
        for (code, zone) in ZONES {
            assert!(
                zone.parse::<chrono_tz::Tz>().is_ok(),
                "{code} maps to unknown zone {zone}"
            );
        }
    }
}
