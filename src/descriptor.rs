//! Sparse matrix descriptors
//!
//! Plain data records describing sparse matrices: the general matrix
//! descriptor (`MatDescr`) and the hybrid ELL+COO container (`HybMat`).
//! Values in a `HybMat` are type-erased behind a runtime `DType` tag so a
//! single container serves every supported element kind; typed access is
//! checked and zero-copy.

use crate::dtype::{Complex64, Complex128, DType, Element};
use crate::error::{Error, Result};

/// Structural class of a sparse matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixType {
    /// No structural assumptions (default)
    #[default]
    General,
    /// Symmetric: A = A^T
    Symmetric,
    /// Hermitian: A = A^H
    Hermitian,
    /// Triangular
    Triangular,
}

/// Base of the stored indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// Indices start at zero (default)
    #[default]
    Zero,
    /// Indices start at one
    One,
}

/// Sparse matrix descriptor
///
/// Created with `Default`, passed to library calls that involve the matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatDescr {
    matrix_type: MatrixType,
    index_base: IndexBase,
}

impl MatDescr {
    /// Create a descriptor with default settings (general, zero-based)
    pub fn new() -> Self {
        Self::default()
    }

    /// Matrix type
    #[inline]
    pub fn matrix_type(&self) -> MatrixType {
        self.matrix_type
    }

    /// Set the matrix type
    pub fn set_matrix_type(&mut self, matrix_type: MatrixType) {
        self.matrix_type = matrix_type;
    }

    /// Index base
    #[inline]
    pub fn index_base(&self) -> IndexBase {
        self.index_base
    }

    /// Set the index base
    pub fn set_index_base(&mut self, index_base: IndexBase) {
        self.index_base = index_base;
    }
}

/// How the hybrid format splits non-zeros between its ELL and COO parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HybPartition {
    /// Library picks the ELL width (default)
    #[default]
    Auto,
    /// Caller supplies the ELL width
    User,
    /// Everything in ELL, COO part empty
    Max,
}

/// DType-tagged owned value storage
///
/// Stores values of any supported element kind behind a runtime tag; typed
/// access is checked against the tag and borrows without copying.
#[derive(Debug, Clone, PartialEq)]
pub enum ValBuffer {
    /// f32 values
    F32(Vec<f32>),
    /// f64 values
    F64(Vec<f64>),
    /// i32 values
    I32(Vec<i32>),
    /// u64 values
    U64(Vec<u64>),
    /// Complex64 values
    Complex64(Vec<Complex64>),
    /// Complex128 values
    Complex128(Vec<Complex128>),
}

impl ValBuffer {
    /// Create an empty buffer of the given dtype
    pub fn empty(dtype: DType) -> Self {
        match dtype {
            DType::F32 => Self::F32(Vec::new()),
            DType::F64 => Self::F64(Vec::new()),
            DType::I32 => Self::I32(Vec::new()),
            DType::U64 => Self::U64(Vec::new()),
            DType::Complex64 => Self::Complex64(Vec::new()),
            DType::Complex128 => Self::Complex128(Vec::new()),
        }
    }

    /// Create a buffer by copying a typed slice
    pub fn from_slice<T: Element>(values: &[T]) -> Self {
        match T::DTYPE {
            DType::F32 => Self::F32(bytemuck::cast_slice(values).to_vec()),
            DType::F64 => Self::F64(bytemuck::cast_slice(values).to_vec()),
            DType::I32 => Self::I32(bytemuck::cast_slice(values).to_vec()),
            DType::U64 => Self::U64(bytemuck::cast_slice(values).to_vec()),
            DType::Complex64 => Self::Complex64(bytemuck::cast_slice(values).to_vec()),
            DType::Complex128 => Self::Complex128(bytemuck::cast_slice(values).to_vec()),
        }
    }

    /// The dtype tag of the stored values
    pub fn dtype(&self) -> DType {
        match self {
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
            Self::I32(_) => DType::I32,
            Self::U64(_) => DType::U64,
            Self::Complex64(_) => DType::Complex64,
            Self::Complex128(_) => DType::Complex128,
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::U64(v) => v.len(),
            Self::Complex64(v) => v.len(),
            Self::Complex128(v) => v.len(),
        }
    }

    /// True if no elements are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the values as a typed slice
    ///
    /// # Errors
    ///
    /// `DTypeMismatch` if `T` does not match the buffer's dtype tag.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        let slice: &[T] = match (self, T::DTYPE) {
            (Self::F32(v), DType::F32) => bytemuck::cast_slice(v),
            (Self::F64(v), DType::F64) => bytemuck::cast_slice(v),
            (Self::I32(v), DType::I32) => bytemuck::cast_slice(v),
            (Self::U64(v), DType::U64) => bytemuck::cast_slice(v),
            (Self::Complex64(v), DType::Complex64) => bytemuck::cast_slice(v),
            (Self::Complex128(v), DType::Complex128) => bytemuck::cast_slice(v),
            _ => {
                return Err(Error::DTypeMismatch {
                    lhs: self.dtype(),
                    rhs: T::DTYPE,
                });
            }
        };
        Ok(slice)
    }
}

/// Linear offset of ELL entry (row, slot) for an m-row matrix
///
/// ELL storage is column-major over slots: all rows' slot 0 entries first,
/// then slot 1, and so on.
#[inline]
pub const fn ell_index(row: usize, slot: usize, m: usize) -> usize {
    slot * m + row
}

/// Hybrid (ELL + COO) sparse matrix container
///
/// Regular rows go into the ELL part (fixed width per row, column-major slot
/// storage with -1 padding in unused slots); overflow entries go into the COO
/// part. Pure data record: construct, fill the parts, read back.
#[derive(Debug, Clone, PartialEq)]
pub struct HybMat {
    m: usize,
    n: usize,
    partition: HybPartition,
    ell_width: usize,
    ell_col_ind: Vec<i32>,
    ell_val: ValBuffer,
    coo_row_ind: Vec<i32>,
    coo_col_ind: Vec<i32>,
    coo_val: ValBuffer,
}

impl HybMat {
    /// Create an empty hybrid matrix with both parts unpopulated
    pub fn empty(m: usize, n: usize, dtype: DType, partition: HybPartition) -> Self {
        Self {
            m,
            n,
            partition,
            ell_width: 0,
            ell_col_ind: Vec::new(),
            ell_val: ValBuffer::empty(dtype),
            coo_row_ind: Vec::new(),
            coo_col_ind: Vec::new(),
            coo_val: ValBuffer::empty(dtype),
        }
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

    /// Partition scheme
    #[inline]
    pub fn partition(&self) -> HybPartition {
        self.partition
    }

    /// Value dtype
    #[inline]
    pub fn dtype(&self) -> DType {
        self.ell_val.dtype()
    }

    /// ELL width (maximum non-zeros per row in the ELL part)
    #[inline]
    pub fn ell_width(&self) -> usize {
        self.ell_width
    }

    /// Number of ELL slots (including padding entries)
    #[inline]
    pub fn ell_nnz(&self) -> usize {
        self.ell_col_ind.len()
    }

    /// ELL column indices (slot-major, -1 marks a padded slot)
    #[inline]
    pub fn ell_col_ind(&self) -> &[i32] {
        &self.ell_col_ind
    }

    /// ELL values
    #[inline]
    pub fn ell_val(&self) -> &ValBuffer {
        &self.ell_val
    }

    /// Number of COO entries
    #[inline]
    pub fn coo_nnz(&self) -> usize {
        self.coo_row_ind.len()
    }

    /// COO row indices
    #[inline]
    pub fn coo_row_ind(&self) -> &[i32] {
        &self.coo_row_ind
    }

    /// COO column indices
    #[inline]
    pub fn coo_col_ind(&self) -> &[i32] {
        &self.coo_col_ind
    }

    /// COO values
    #[inline]
    pub fn coo_val(&self) -> &ValBuffer {
        &self.coo_val
    }

    /// Total stored entries across both parts
    #[inline]
    pub fn nnz(&self) -> usize {
        self.ell_nnz() + self.coo_nnz()
    }

    /// Populate the ELL part
    ///
    /// `col_ind` and `val` are slot-major with `width * m` entries each; use
    /// [`ell_index`] to address them.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the arrays disagree with `width * m`,
    /// `DTypeMismatch` if `val` carries a different dtype than the container.
    pub fn set_ell_part(&mut self, width: usize, col_ind: Vec<i32>, val: ValBuffer) -> Result<()> {
        let expected = width * self.m;
        if col_ind.len() != expected || val.len() != expected {
            return Err(Error::ShapeMismatch {
                expected: [expected, expected, 0],
                got: [col_ind.len(), val.len(), 0],
            });
        }
        if val.dtype() != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: val.dtype(),
            });
        }
        self.ell_width = width;
        self.ell_col_ind = col_ind;
        self.ell_val = val;
        Ok(())
    }

    /// Populate the COO part
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the three arrays differ in length, `DTypeMismatch`
    /// if `val` carries a different dtype than the container.
    pub fn set_coo_part(
        &mut self,
        row_ind: Vec<i32>,
        col_ind: Vec<i32>,
        val: ValBuffer,
    ) -> Result<()> {
        let nnz = val.len();
        if row_ind.len() != nnz || col_ind.len() != nnz {
            return Err(Error::ShapeMismatch {
                expected: [nnz, nnz, nnz],
                got: [row_ind.len(), col_ind.len(), nnz],
            });
        }
        if val.dtype() != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: val.dtype(),
            });
        }
        self.coo_row_ind = row_ind;
        self.coo_col_ind = col_ind;
        self.coo_val = val;
        Ok(())
    }
}
