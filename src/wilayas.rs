//! The 58 Algerian wilayas.
//!
//! Coordinates are approximate positions of each wilaya's capital, in
//! degrees. Index `i` in [`WILAYAS`] is city index `i` in the matrix
//! returned by [`distance_matrix`]; the official wilaya code is `i + 1`.

use crate::distance::{City, DistanceMatrix};
use crate::error::AcoResult;

/// A wilaya and the coordinates of its capital.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wilaya {
    /// Official code, 1 to 58.
    pub code: u8,
    /// Wilaya name.
    pub name: &'static str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

const fn w(code: u8, name: &'static str, lat: f64, lon: f64) -> Wilaya {
    Wilaya {
        code,
        name,
        lat,
        lon,
    }
}

/// Number of wilayas.
pub const WILAYA_COUNT: usize = 58;

/// Default start index (Adrar).
pub const DEFAULT_START: usize = 0;

/// Default end index (Alger).
pub const DEFAULT_END: usize = 15;

/// All wilayas, ordered by code.
pub const WILAYAS: [Wilaya; WILAYA_COUNT] = [
    w(1, "Adrar", 27.874, -0.294),
    w(2, "Chlef", 36.165, 1.334),
    w(3, "Laghouat", 33.800, 2.865),
    w(4, "Oum El Bouaghi", 35.877, 7.113),
    w(5, "Batna", 35.556, 6.174),
    w(6, "Bejaia", 36.751, 5.056),
    w(7, "Biskra", 34.850, 5.728),
    w(8, "Bechar", 31.617, -2.217),
    w(9, "Blida", 36.470, 2.828),
    w(10, "Bouira", 36.375, 3.902),
    w(11, "Tamanrasset", 22.785, 5.523),
    w(12, "Tebessa", 35.404, 8.124),
    w(13, "Tlemcen", 34.878, -1.315),
    w(14, "Tiaret", 35.371, 1.317),
    w(15, "Tizi Ouzou", 36.712, 4.046),
    w(16, "Alger", 36.754, 3.059),
    w(17, "Djelfa", 34.673, 3.263),
    w(18, "Jijel", 36.820, 5.766),
    w(19, "Setif", 36.190, 5.414),
    w(20, "Saida", 34.831, 0.151),
    w(21, "Skikda", 36.876, 6.907),
    w(22, "Sidi Bel Abbes", 35.190, -0.631),
    w(23, "Annaba", 36.900, 7.766),
    w(24, "Guelma", 36.462, 7.426),
    w(25, "Constantine", 36.365, 6.615),
    w(26, "Medea", 36.264, 2.754),
    w(27, "Mostaganem", 35.931, 0.089),
    w(28, "M'Sila", 35.706, 4.542),
    w(29, "Mascara", 35.397, 0.140),
    w(30, "Ouargla", 31.949, 5.325),
    w(31, "Oran", 35.697, -0.633),
    w(32, "El Bayadh", 33.683, 1.020),
    w(33, "Illizi", 26.484, 8.466),
    w(34, "Bordj Bou Arreridj", 36.073, 4.761),
    w(35, "Boumerdes", 36.766, 3.477),
    w(36, "El Tarf", 36.767, 8.314),
    w(37, "Tindouf", 27.674, -8.148),
    w(38, "Tissemsilt", 35.607, 1.811),
    w(39, "El Oued", 33.368, 6.867),
    w(40, "Khenchela", 35.436, 7.143),
    w(41, "Souk Ahras", 36.286, 7.951),
    w(42, "Tipaza", 36.589, 2.448),
    w(43, "Mila", 36.450, 6.264),
    w(44, "Ain Defla", 36.264, 1.968),
    w(45, "Naama", 33.267, -0.313),
    w(46, "Ain Temouchent", 35.297, -1.140),
    w(47, "Ghardaia", 32.490, 3.674),
    w(48, "Relizane", 35.737, 0.556),
    w(49, "Timimoun", 29.263, 0.231),
    w(50, "Bordj Badji Mokhtar", 21.328, 0.955),
    w(51, "Ouled Djellal", 34.417, 5.066),
    w(52, "Beni Abbes", 30.132, -2.167),
    w(53, "In Salah", 27.197, 2.482),
    w(54, "In Guezzam", 19.572, 5.772),
    w(55, "Touggourt", 33.105, 6.058),
    w(56, "Djanet", 24.554, 9.484),
    w(57, "El M'Ghair", 33.950, 5.924),
    w(58, "El Meniaa", 30.583, 2.883),
];

/// The wilayas as [`City`] values, in index order.
pub fn cities() -> Vec<City> {
    WILAYAS
        .iter()
        .map(|w| City::new(w.name, w.lat, w.lon))
        .collect()
}

/// Planar Euclidean distance matrix over all 58 wilayas.
pub fn distance_matrix() -> AcoResult<DistanceMatrix> {
    DistanceMatrix::from_cities(&cities())
}

/// Index of the wilaya named `name`, ignoring ASCII case.
pub fn index_of(name: &str) -> Option<usize> {
    WILAYAS
        .iter()
        .position(|w| w.name.eq_ignore_ascii_case(name.trim()))
}
