//! Dense distance matrix.

use super::city::City;
use crate::error::{AcoError, AcoResult};

/// Tolerance for the symmetry check on caller-supplied matrices.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense, validated n×n distance matrix stored in row-major order.
///
/// Once constructed the matrix is square, symmetric, finite,
/// non-negative, has a zero diagonal, and holds at least 3 cities.
/// It is never mutated afterwards.
///
/// # Examples
///
/// ```
/// use wilaya_aco::distance::{City, DistanceMatrix};
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 3.0, 4.0),
///     City::new("c", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds the pairwise planar Euclidean matrix for `cities`.
    pub fn from_cities(cities: &[City]) -> AcoResult<Self> {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data)
    }

    /// Builds a matrix from nested rows.
    ///
    /// Fails with [`AcoError::InvalidInput`] if any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(AcoError::invalid(format!(
                "distance matrix is not square: row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        Self::from_data(n, rows.into_iter().flatten().collect())
    }

    /// Builds a matrix from a flat row-major buffer of `size * size`
    /// entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> AcoResult<Self> {
        if data.len() != size * size {
            return Err(AcoError::invalid(format!(
                "distance matrix has {} entries, expected {size}x{size}",
                data.len()
            )));
        }
        if size < 3 {
            return Err(AcoError::invalid(format!(
                "at least 3 cities are required, got {size}"
            )));
        }

        for i in 0..size {
            for j in 0..size {
                let d = data[i * size + j];
                if !d.is_finite() || d < 0.0 {
                    return Err(AcoError::invalid(format!(
                        "distance ({i}, {j}) must be finite and non-negative, got {d}"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(AcoError::invalid(format!(
                        "diagonal entry ({i}, {i}) must be zero, got {d}"
                    )));
                }
                if j > i && (d - data[j * size + i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(AcoError::invalid(format!(
                        "distance matrix is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }

        Ok(Self { data, size })
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First pair `(i, j)` with `i < j` at zero distance, if any.
    pub fn zero_off_diagonal(&self) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|i| ((i + 1)..self.size).map(move |j| (i, j)))
            .find(|&(i, j)| self.get(i, j) == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 1.0, 0.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 0.0, 1.0),
        ]
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&square()).unwrap();
        assert_eq!(dm.size(), 4);
        assert!((dm.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((dm.get(0, 2) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(dm.get(3, 3), 0.0);
        assert!(dm.zero_off_diagonal().is_none());
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0],
            vec![2.0, 1.0, 0.0],
        ])
        .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_too_few_cities() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_wrong_buffer_length() {
        assert!(DistanceMatrix::from_data(3, vec![0.0; 8]).is_err());
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let neg = vec![
            vec![0.0, -1.0, 1.0],
            vec![-1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        assert!(DistanceMatrix::from_rows(neg).is_err());

        let nan = vec![
            vec![0.0, f64::NAN, 1.0],
            vec![f64::NAN, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        assert!(DistanceMatrix::from_rows(nan).is_err());
    }

    #[test]
    fn test_rejects_nonzero_diagonal() {
        let rows = vec![
            vec![1.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        assert!(DistanceMatrix::from_rows(rows).is_err());
    }

    #[test]
    fn test_rejects_asymmetric() {
        let rows = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.5, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ];
        assert!(DistanceMatrix::from_rows(rows).is_err());
    }

    #[test]
    fn test_zero_off_diagonal_detected() {
        let mut cities = square();
        cities.push(City::new("dup", 1.0, 1.0));
        let dm = DistanceMatrix::from_cities(&cities).unwrap();
        assert_eq!(dm.zero_off_diagonal(), Some((2, 4)));
    }
}
