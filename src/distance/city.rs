//! Named geographic point.

/// A named point with latitude/longitude coordinates in degrees.
///
/// # Examples
///
/// ```
/// use wilaya_aco::distance::City;
///
/// let a = City::new("A", 0.0, 0.0);
/// let b = City::new("B", 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl City {
    /// Creates a city.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Planar Euclidean distance in degree units.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}
