use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// IndexKind
///
/// Which flavour of index a builder/descriptor stands for.
/// Only affects labels (errors, display, metrics), never key encoding.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    #[default]
    #[display("CompositeIndex")]
    Composite,

    #[display("GSI")]
    Global,
}

///
/// MissingPart
///
/// The configuration slots `IndexBuilder::build` checks, in check order.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum MissingPart {
    #[display("name")]
    Name,

    #[display("partition key spec")]
    PartitionKeySpec,

    #[display("sort key spec")]
    SortKeySpec,

    #[display("encoding method")]
    EncodingMethod,
}

///
/// KeyPart
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum KeyPart {
    #[display("partition")]
    Partition,

    #[display("sort")]
    Sort,
}
