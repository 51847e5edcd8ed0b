//! Numeric container messages (`dqnumerics.proto`).
//!
//! The engine transports dense double arrays as little-endian byte blobs
//! rather than repeated fields; the helpers here are the only place the
//! blob layout is interpreted client-side.

/// A dense vector of doubles, data encoded little-endian.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vector {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

impl Vector {
    pub fn from_values(values: &[f64]) -> Self {
        let mut data = Vec::with_capacity(values.len() * 8);
        for v in values {
            data.extend_from_slice(&v.to_le_bytes());
        }
        Vector { data }
    }

    pub fn to_values(&self) -> Vec<f64> {
        self.data
            .chunks_exact(8)
            .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.data.len() / 8
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A dense matrix of doubles, data encoded little-endian in the declared
/// storage order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Matrix {
    #[prost(int32, tag = "1")]
    pub rows: i32,
    #[prost(int32, tag = "2")]
    pub cols: i32,
    #[prost(bytes = "vec", tag = "3")]
    pub data: Vec<u8>,
    #[prost(enumeration = "StorageOrder", tag = "4")]
    pub storage_order: i32,
}

impl Matrix {
    /// Builds a row-major matrix from values laid out row by row.
    pub fn from_rows(rows: i32, cols: i32, values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), (rows * cols) as usize);
        let mut data = Vec::with_capacity(values.len() * 8);
        for v in values {
            data.extend_from_slice(&v.to_le_bytes());
        }
        Matrix { rows, cols, data, storage_order: StorageOrder::RowMajor as i32 }
    }

    /// Builds a single-column matrix, the engine's layout for time series
    /// values.
    pub fn column(values: &[f64]) -> Self {
        Self::from_rows(values.len() as i32, 1, values)
    }

    pub fn to_values(&self) -> Vec<f64> {
        self.data
            .chunks_exact(8)
            .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StorageOrder {
    InvalidStorageOrder = 0,
    RowMajor = 1,
    ColMajor = 2,
}

impl StorageOrder {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            StorageOrder::InvalidStorageOrder => "INVALID_STORAGE_ORDER",
            StorageOrder::RowMajor => "ROW_MAJOR",
            StorageOrder::ColMajor => "COL_MAJOR",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_STORAGE_ORDER" => Some(StorageOrder::InvalidStorageOrder),
            "ROW_MAJOR" => Some(StorageOrder::RowMajor),
            "COL_MAJOR" => Some(StorageOrder::ColMajor),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InterpMethod {
    InvalidInterpMethod = 0,
    LinearInterp = 1,
    LogLinearInterp = 2,
    CubicSplineInterp = 3,
    FlatForwardInterp = 4,
}

impl InterpMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            InterpMethod::InvalidInterpMethod => "INVALID_INTERP_METHOD",
            InterpMethod::LinearInterp => "LINEAR_INTERP",
            InterpMethod::LogLinearInterp => "LOG_LINEAR_INTERP",
            InterpMethod::CubicSplineInterp => "CUBIC_SPLINE_INTERP",
            InterpMethod::FlatForwardInterp => "FLAT_FORWARD_INTERP",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_INTERP_METHOD" => Some(InterpMethod::InvalidInterpMethod),
            "LINEAR_INTERP" => Some(InterpMethod::LinearInterp),
            "LOG_LINEAR_INTERP" => Some(InterpMethod::LogLinearInterp),
            "CUBIC_SPLINE_INTERP" => Some(InterpMethod::CubicSplineInterp),
            "FLAT_FORWARD_INTERP" => Some(InterpMethod::FlatForwardInterp),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ExtrapMethod {
    InvalidExtrapMethod = 0,
    FlatExtrap = 1,
    LinearExtrap = 2,
}

impl ExtrapMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ExtrapMethod::InvalidExtrapMethod => "INVALID_EXTRAP_METHOD",
            ExtrapMethod::FlatExtrap => "FLAT_EXTRAP",
            ExtrapMethod::LinearExtrap => "LINEAR_EXTRAP",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_EXTRAP_METHOD" => Some(ExtrapMethod::InvalidExtrapMethod),
            "FLAT_EXTRAP" => Some(ExtrapMethod::FlatExtrap),
            "LINEAR_EXTRAP" => Some(ExtrapMethod::LinearExtrap),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CompoundingType {
    InvalidCompoundingType = 0,
    SimpleCompounding = 1,
    AnnualCompounding = 2,
    ContinuousCompounding = 3,
}

impl CompoundingType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            CompoundingType::InvalidCompoundingType => "INVALID_COMPOUNDING_TYPE",
            CompoundingType::SimpleCompounding => "SIMPLE_COMPOUNDING",
            CompoundingType::AnnualCompounding => "ANNUAL_COMPOUNDING",
            CompoundingType::ContinuousCompounding => "CONTINUOUS_COMPOUNDING",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_COMPOUNDING_TYPE" => Some(CompoundingType::InvalidCompoundingType),
            "SIMPLE_COMPOUNDING" => Some(CompoundingType::SimpleCompounding),
            "ANNUAL_COMPOUNDING" => Some(CompoundingType::AnnualCompounding),
            "CONTINUOUS_COMPOUNDING" => Some(CompoundingType::ContinuousCompounding),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn vector_preserves_le_double_layout() {
        let v = Vector::from_values(&[0.01, 0.03]);
        assert_eq!(v.data.len(), 16);
        assert_eq!(v.to_values(), vec![0.01, 0.03]);
        // Recorded blob for [0.01, 0.03].
        assert_eq!(
            v.data,
            b"{\x14\xaeG\xe1z\x84?\xb8\x1e\x85\xebQ\xb8\x9e?"
        );
    }

    #[test]
    fn column_matrix_wire_bytes_are_stable() {
        let m = Matrix::column(&[0.01, 0.03]);
        assert_eq!((m.rows, m.cols), (2, 1));
        assert_eq!(
            m.encode_to_vec(),
            b"\x08\x02\x10\x01\x1a\x10{\x14\xaeG\xe1z\x84?\xb8\x1e\x85\xebQ\xb8\x9e? \x01"
        );
    }

    #[test]
    fn matrix_round_trips_values() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.to_values(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
