use crate::error::{Coordinate, SucursalError};

/// A point to measure distances from, never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Parse a position from raw path segments.
    ///
    /// Checks run latitude format, latitude range, longitude format, longitude range and stop at
    /// the first failure, so only one error is ever reported.
    pub fn parse(lat: &str, lon: &str) -> Result<Self, SucursalError> {
        let latitude = parse_coordinate(lat, Coordinate::Latitude)?;
        let longitude = parse_coordinate(lon, Coordinate::Longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(raw: &str, axis: Coordinate) -> Result<f64, SucursalError> {
    let degrees = raw
        .parse::<f64>()
        .ok()
        .filter(|d| !d.is_nan())
        .ok_or(SucursalError::InvalidFormat(axis))?;

    // Infinities parse fine and fall out of range here
    if axis.contains(degrees) {
        Ok(degrees)
    } else {
        Err(SucursalError::OutOfRange(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_err(lat: &str, lon: &str) -> SucursalError {
        Position::parse(lat, lon).expect_err("Position should have been rejected")
    }

    #[test]
    fn test_valid() {
        let pos = Position::parse("10.20", "-102.8").unwrap();
        assert_eq!(pos.latitude, 10.2);
        assert_eq!(pos.longitude, -102.8);
    }

    #[test]
    fn test_bounds_inclusive() {
        let pos = Position::parse("-90", "180").unwrap();
        assert_eq!(pos.latitude, -90.0);
        assert_eq!(pos.longitude, 180.0);
    }

    #[test]
    fn test_lat_out_of_range() {
        assert!(matches!(
            expect_err("91", "0"),
            SucursalError::OutOfRange(Coordinate::Latitude)
        ));
    }

    #[test]
    fn test_lon_out_of_range() {
        assert!(matches!(
            expect_err("0", "181"),
            SucursalError::OutOfRange(Coordinate::Longitude)
        ));
    }

    #[test]
    fn test_lat_bad_format() {
        assert!(matches!(
            expect_err("abc", "0"),
            SucursalError::InvalidFormat(Coordinate::Latitude)
        ));
    }

    #[test]
    fn test_first_failure_wins() {
        // Both are broken, latitude is checked first
        assert!(matches!(
            expect_err("invalid", "invalid"),
            SucursalError::InvalidFormat(Coordinate::Latitude)
        ));
        // Latitude range is checked before longitude format
        assert!(matches!(
            expect_err("-95", "invalid"),
            SucursalError::OutOfRange(Coordinate::Latitude)
        ));
        assert!(matches!(
            expect_err("45", "invalid"),
            SucursalError::InvalidFormat(Coordinate::Longitude)
        ));
    }

    #[test]
    fn test_nan_is_bad_format() {
        assert!(matches!(
            expect_err("NaN", "0"),
            SucursalError::InvalidFormat(Coordinate::Latitude)
        ));
        assert!(matches!(
            expect_err("0", "nan"),
            SucursalError::InvalidFormat(Coordinate::Longitude)
        ));
    }

    #[test]
    fn test_infinity_is_out_of_range() {
        assert!(matches!(
            expect_err("inf", "0"),
            SucursalError::OutOfRange(Coordinate::Latitude)
        ));
        assert!(matches!(
            expect_err("0", "-infinity"),
            SucursalError::OutOfRange(Coordinate::Longitude)
        ));
    }
}
