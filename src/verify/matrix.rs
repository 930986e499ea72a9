//! Column-major matrix views for verification

use crate::dtype::Element;
use crate::error::{Error, Result};

/// Borrowed column-major view over an m x n region with leading dimension lda
///
/// Element (i, j) lives at linear offset `i + j * lda`. The leading dimension
/// may exceed the row count for padded storage; padding rows are never read.
/// The view is read-only and never allocates.
#[derive(Debug, Clone, Copy)]
pub struct MatrixRef<'a, T: Element> {
    data: &'a [T],
    m: usize,
    n: usize,
    lda: usize,
}

impl<'a, T: Element> MatrixRef<'a, T> {
    /// Create a view over `data` with explicit leading dimension
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `lda < m` or if `data` is too short to
    /// hold the last column. Both checks are skipped for zero-sized regions,
    /// which are always valid.
    pub fn new(data: &'a [T], m: usize, n: usize, lda: usize) -> Result<Self> {
        if m > 0 && n > 0 {
            if lda < m {
                return Err(Error::invalid_argument(
                    "lda",
                    format!("leading dimension {} is smaller than row count {}", lda, m),
                ));
            }
            let needed = (n - 1) * lda + m;
            if data.len() < needed {
                return Err(Error::invalid_argument(
                    "data",
                    format!(
                        "buffer holds {} elements but {}x{} with lda {} needs {}",
                        data.len(),
                        m,
                        n,
                        lda,
                        needed
                    ),
                ));
            }
        }
        Ok(Self { data, m, n, lda })
    }

    /// Create a tightly packed view (`lda == m`)
    pub fn from_column_major(data: &'a [T], m: usize, n: usize) -> Result<Self> {
        Self::new(data, m, n, m)
    }

    /// Number of rows
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of columns
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Leading dimension (stride between columns)
    #[inline]
    pub fn lda(&self) -> usize {
        self.lda
    }

    /// Declared shape as (m, n, lda)
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [self.m, self.n, self.lda]
    }

    /// True if the logical region holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.m == 0 || self.n == 0
    }

    /// Read element (i, j)
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.m && j < self.n);
        self.data[i + j * self.lda]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_view() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = MatrixRef::from_column_major(&data, 2, 3).unwrap();
        assert_eq!(view.dims(), [2, 3, 2]);
        assert_eq!(view.get(0, 0), 1.0);
        assert_eq!(view.get(1, 0), 2.0);
        assert_eq!(view.get(0, 2), 5.0);
        assert_eq!(view.get(1, 2), 6.0);
    }

    #[test]
    fn test_padded_view() {
        // 2x2 region in storage with lda = 3; offsets 2 and 5 are padding
        let data = [1.0f64, 2.0, -99.0, 3.0, 4.0];
        let view = MatrixRef::new(&data, 2, 2, 3).unwrap();
        assert_eq!(view.get(0, 1), 3.0);
        assert_eq!(view.get(1, 1), 4.0);
    }

    #[test]
    fn test_lda_too_small() {
        let data = [0i32; 6];
        assert!(MatrixRef::new(&data, 3, 2, 2).is_err());
    }

    #[test]
    fn test_buffer_too_short() {
        let data = [0.0f32; 5];
        // 2x3 with lda 2 needs 6 elements
        assert!(MatrixRef::new(&data, 2, 3, 2).is_err());
    }

    #[test]
    fn test_last_column_may_be_short() {
        // (n-1)*lda + m = 1*3 + 2 = 5; padding after the last logical row
        // of the final column is not required to exist
        let data = [0.0f32; 5];
        assert!(MatrixRef::new(&data, 2, 2, 3).is_ok());
    }

    #[test]
    fn test_zero_sized() {
        let data: [f32; 0] = [];
        let view = MatrixRef::new(&data, 0, 5, 0).unwrap();
        assert!(view.is_empty());
        let view = MatrixRef::new(&data, 3, 0, 1).unwrap();
        assert!(view.is_empty());
    }
}
