use crate::errors::WeatherError;

/// Validates user supplied latitude and longitude.
///
/// Pure bounds check, must run before any network call is attempted.
///
/// # Arguments
///
/// * 'latitude' - latitude in degrees, valid within [-90, 90]
/// * 'longitude' - longitude in degrees, valid within [-180, 180]
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(WeatherError::InvalidCoordinate);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_coordinates() {
        assert!(validate_coordinates(0.0, 0.0).is_ok());
        assert!(validate_coordinates(52.23, 21.01).is_ok());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
        assert!(validate_coordinates(90.0, 180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(validate_coordinates(90.1, 0.0), Err(WeatherError::InvalidCoordinate));
        assert_eq!(validate_coordinates(-91.0, 0.0), Err(WeatherError::InvalidCoordinate));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert_eq!(validate_coordinates(0.0, 180.5), Err(WeatherError::InvalidCoordinate));
        assert_eq!(validate_coordinates(0.0, -181.0), Err(WeatherError::InvalidCoordinate));
    }
}
