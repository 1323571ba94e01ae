use crate::error::StarGazerError;

/// A validated geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parses caller-supplied latitude/longitude strings and checks the closed
/// ranges [-90, 90] / [-180, 180].
pub fn parse_coordinate(lat: &str, lon: &str) -> Result<Coordinate, StarGazerError> {
    let (latitude, longitude) = match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
        (Ok(la), Ok(lo)) => (la, lo),
        _ => {
            return Err(StarGazerError::validation(
                "Invalid latitude or longitude format",
            ))
        }
    };

    // NaN fails both comparisons and lands in the range error, matching the
    // original server's comparison semantics.
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(StarGazerError::validation(
            "Latitude must be between -90 and 90 degrees",
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(StarGazerError::validation(
            "Longitude must be between -180 and 180 degrees",
        ));
    }

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

/// Syntactic date check: non-empty, exactly 10 bytes, exactly two dashes.
///
/// Calendar validity is not checked ("2024-02-30" passes); the vendor rejects
/// impossible dates.
pub fn validate_date(date: &str) -> Result<(), StarGazerError> {
    if date.is_empty() || date.len() != 10 || date.matches('-').count() != 2 {
        return Err(StarGazerError::validation(
            "Date must be in YYYY-MM-DD format",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let coord = parse_coordinate("52.52", "13.41").unwrap();
        assert_eq!(coord.latitude, 52.52);
        assert_eq!(coord.longitude, 13.41);
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(parse_coordinate("90", "180").is_ok());
        assert!(parse_coordinate("-90", "-180").is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        for lat in ["91", "-100", "90.0001"] {
            let err = parse_coordinate(lat, "0").unwrap_err();
            assert_eq!(err.to_string(), "Latitude must be between -90 and 90 degrees");
        }
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        for lon in ["181", "-180.5"] {
            let err = parse_coordinate("0", lon).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Longitude must be between -180 and 180 degrees"
            );
        }
    }

    #[test]
    fn rejects_unparseable_input() {
        for (lat, lon) in [("abc", "0"), ("0", ""), ("12.3.4", "0")] {
            let err = parse_coordinate(lat, lon).unwrap_err();
            assert_eq!(err.to_string(), "Invalid latitude or longitude format");
        }
    }

    #[test]
    fn nan_fails_the_range_check() {
        let err = parse_coordinate("NaN", "0").unwrap_err();
        assert_eq!(err.to_string(), "Latitude must be between -90 and 90 degrees");
    }

    #[test]
    fn accepts_well_formed_dates() {
        assert!(validate_date("2024-06-15").is_ok());
        // Syntactic check only: calendar-impossible dates pass
        assert!(validate_date("2024-02-30").is_ok());
    }

    #[test]
    fn rejects_malformed_dates() {
        for date in ["", "2024-1-1", "20240101", "2024/06/15", "2024-06-150"] {
            let err = validate_date(date).unwrap_err();
            assert_eq!(err.to_string(), "Date must be in YYYY-MM-DD format");
        }
    }
}
