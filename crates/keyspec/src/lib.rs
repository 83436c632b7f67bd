//! keyspec: declarative partition and sort keys for single-table designs.
//!
//! Describe an index once with [`IndexBuilder`], then derive its keys from
//! any entity that exposes its fields by name:
//!
//! ```ignore
//! use keyspec::prelude::*;
//!
//! #[derive(FieldValues)]
//! #[keyspec(rename_all = "camelCase")]
//! struct User {
//!     first_name: String,
//!     last_name: String,
//!     created_at: Option<u64>,
//! }
//!
//! let index = IndexBuilder::<User>::for_entity()
//!     .with_name("users-by-name")
//!     .with_partition_key(KeySpec::new("users-by-name", ["firstName", "lastName"]))
//!     .with_sort_key(KeySpec::new("created-at", ["createdAt"]))
//!     .with_encoding_method(|segments: &[Segment]| {
//!         segments.iter().map(ToString::to_string).collect::<Vec<_>>().join("#")
//!     })
//!     .build()?;
//! ```

pub use keyspec_core::{config, error, index, obs, segment, traits, values};

pub use keyspec_core::{
    error::Error,
    index::{BuildError, IndexBuilder, IndexDescriptor, IndexKind, KeySpec},
    segment::Segment,
    traits::{FieldValues, SegmentValue},
    values::Values,
};
pub use keyspec_derive::FieldValues;

///
/// Prelude
///

pub mod prelude {
    pub use keyspec_core::prelude::*;
    pub use keyspec_derive::FieldValues;
}
