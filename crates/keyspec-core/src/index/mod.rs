//! Composite index definitions.
//!
//! An index is described once through [`IndexBuilder`] and then used through
//! the immutable [`IndexDescriptor`] it produces:
//! - the builder only collects parts and checks that all of them exist
//! - the descriptor turns entity fields into encoded partition/sort keys
//!
//! Both composite (table) indexes and global secondary indexes share this one
//! implementation; [`IndexKind`] is the only thing that tells them apart.

mod builder;
mod descriptor;
mod kind;
mod spec;


pub use builder::{BuildError, IndexBuilder};
pub use descriptor::{EncodingMethod, IndexDescriptor, IndexKeys};
pub use kind::{IndexKind, KeyPart, MissingPart};
pub use spec::{KeySpec, TransformValues};
