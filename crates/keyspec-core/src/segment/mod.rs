
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Segment
///
/// One scalar handed to an encoding method: either the literal key prefix
/// or a value extracted from an entity field.
///
/// Null  → the field was absent or explicitly unset.
///         Partition keys pass it through; sort keys drop it.
///
/// Uint  → only for values above `i64::MAX`. Every smaller integer is
///         stored as `Int`, whatever Rust type it came from, so equal
///         numbers always compare equal.
///
/// Variant order matters for untagged deserialization: integers must be
/// tried before floats so `10` stays `Int(10)`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Null,
}

impl Segment {
    /// Normalised integer segment: `Int` when the value fits, `Uint` otherwise.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Uint(value), Self::Int)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Int(v) if *v >= 0 => Some(v.unsigned_abs()),
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}

// segment_from
// From impls for every concrete type that has a SegmentValue impl
macro_rules! segment_from {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Segment {
                fn from(value: $ty) -> Self {
                    $crate::traits::SegmentValue::to_segment(&value)
                }
            }
        )*
    };
}

segment_from!(&str, String, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: crate::traits::SegmentValue> From<Option<T>> for Segment {
    fn from(value: Option<T>) -> Self {
        crate::traits::SegmentValue::to_segment(&value)
    }
}
