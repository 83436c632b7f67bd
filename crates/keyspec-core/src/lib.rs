//! Core runtime for keyspec: segments, by-name field access, key specs, and
//! the builder/descriptor pair that turns entity fields into encoded
//! partition and sort keys.
#![warn(unreachable_pub)]

extern crate self as keyspec;

pub mod config;
pub mod error;
pub mod index;
pub mod obs;
pub mod segment;
pub mod traits;
pub mod values;

///
/// Prelude
///
/// Domain vocabulary only; errors, config and metrics stay in their modules.
///

pub mod prelude {
    pub use crate::{
        index::{IndexBuilder, IndexDescriptor, IndexKind, KeySpec},
        segment::Segment,
        traits::{FieldValues, SegmentValue},
        values::Values,
    };
}
