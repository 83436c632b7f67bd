use crate::{
    config::IndexConfig,
    index::{EncodingMethod, IndexDescriptor, IndexKind, KeySpec, MissingPart},
    obs::sink::{self, MetricsEvent},
    segment::Segment,
};
use std::{marker::PhantomData, sync::Arc};
use thiserror::Error as ThisError;

///
/// BuildError
///
/// The first configuration slot `IndexBuilder::build` found unset.
/// Slots are checked in a fixed order (name, partition key, sort key,
/// encoding method) and only the first gap is ever reported.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum BuildError {
    #[error("Missing {kind} index name")]
    MissingIndexName { kind: IndexKind },

    #[error("Missing {kind} index PK options")]
    MissingPartitionKeySpec { kind: IndexKind },

    #[error("Missing {kind} index SK options")]
    MissingSortKeySpec { kind: IndexKind },

    #[error("Missing {kind} index encoding method")]
    MissingEncodingMethod { kind: IndexKind },
}

impl BuildError {
    const fn new(kind: IndexKind, missing: MissingPart) -> Self {
        match missing {
            MissingPart::Name => Self::MissingIndexName { kind },
            MissingPart::PartitionKeySpec => Self::MissingPartitionKeySpec { kind },
            MissingPart::SortKeySpec => Self::MissingSortKeySpec { kind },
            MissingPart::EncodingMethod => Self::MissingEncodingMethod { kind },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> IndexKind {
        match self {
            Self::MissingIndexName { kind }
            | Self::MissingPartitionKeySpec { kind }
            | Self::MissingSortKeySpec { kind }
            | Self::MissingEncodingMethod { kind } => *kind,
        }
    }

    #[must_use]
    pub const fn missing(&self) -> MissingPart {
        match self {
            Self::MissingIndexName { .. } => MissingPart::Name,
            Self::MissingPartitionKeySpec { .. } => MissingPart::PartitionKeySpec,
            Self::MissingSortKeySpec { .. } => MissingPart::SortKeySpec,
            Self::MissingEncodingMethod { .. } => MissingPart::EncodingMethod,
        }
    }
}

///
/// IndexBuilder
///
/// Staged, immutable builder for `IndexDescriptor`.
///
/// Every `with_*` call returns a new builder with one slot replaced and
/// leaves the receiver untouched, so a partially configured builder can be
/// shared and branched freely. Nothing is validated until `build`.
///
/// `E` is the entity shape the index keys against; it has no runtime
/// presence. `K` is the encoded key type, fixed by `with_encoding_method`.
///

pub struct IndexBuilder<E, K = String> {
    kind: IndexKind,
    name: Option<String>,
    partition: Option<KeySpec>,
    sort: Option<KeySpec>,
    encoding: Option<EncodingMethod<K>>,
    _marker: PhantomData<fn() -> E>,
}

impl<E> IndexBuilder<E> {
    /// Empty builder for a composite index over `E`.
    #[must_use]
    pub const fn for_entity() -> Self {
        Self::for_entity_kind(IndexKind::Composite)
    }

    #[must_use]
    pub const fn for_entity_kind(kind: IndexKind) -> Self {
        Self {
            kind,
            name: None,
            partition: None,
            sort: None,
            encoding: None,
            _marker: PhantomData,
        }
    }

    /// Builder with kind, name and both key specs taken from config.
    /// Transforms and the encoding method still have to be attached in code.
    #[must_use]
    pub fn from_config(config: &IndexConfig) -> Self {
        Self::for_entity_kind(config.kind)
            .with_name(config.name.clone())
            .with_partition_key(KeySpec::from(&config.partition_key))
            .with_sort_key(KeySpec::from(&config.sort_key))
    }
}

impl<E, K> IndexBuilder<E, K> {
    #[must_use]
    pub const fn kind(&self) -> IndexKind {
        self.kind
    }

    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_partition_key(&self, spec: KeySpec) -> Self {
        Self {
            partition: Some(spec),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sort_key(&self, spec: KeySpec) -> Self {
        Self {
            sort: Some(spec),
            ..self.clone()
        }
    }

    /// Set the encoding method. The encoded key type follows the closure,
    /// so this may change `K`; every other slot carries over.
    #[must_use]
    pub fn with_encoding_method<K2, F>(&self, encoding: F) -> IndexBuilder<E, K2>
    where
        F: Fn(&[Segment]) -> K2 + Send + Sync + 'static,
    {
        IndexBuilder {
            kind: self.kind,
            name: self.name.clone(),
            partition: self.partition.clone(),
            sort: self.sort.clone(),
            encoding: Some(Arc::new(encoding)),
            _marker: PhantomData,
        }
    }

    /// Produce the descriptor, or the first missing slot in check order.
    pub fn build(&self) -> Result<IndexDescriptor<E, K>, BuildError> {
        match self.try_build() {
            Ok(index) => {
                sink::record(MetricsEvent::IndexBuilt {
                    kind: self.kind,
                    index: index.name(),
                });

                Ok(index)
            }
            Err(missing) => {
                sink::record(MetricsEvent::BuildRejected {
                    kind: self.kind,
                    missing,
                });

                Err(BuildError::new(self.kind, missing))
            }
        }
    }

    fn try_build(&self) -> Result<IndexDescriptor<E, K>, MissingPart> {
        let name = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(MissingPart::Name)?;
        let partition = self.partition.as_ref().ok_or(MissingPart::PartitionKeySpec)?;
        let sort = self.sort.as_ref().ok_or(MissingPart::SortKeySpec)?;
        let encoding = self.encoding.as_ref().ok_or(MissingPart::EncodingMethod)?;

        Ok(IndexDescriptor::new(
            self.kind,
            name.to_string(),
            partition.clone(),
            sort.clone(),
            Arc::clone(encoding),
        ))
    }
}

impl<E> Default for IndexBuilder<E> {
    fn default() -> Self {
        Self::for_entity()
    }
}

impl<E, K> Clone for IndexBuilder<E, K> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            partition: self.partition.clone(),
            sort: self.sort.clone(),
            encoding: self.encoding.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, K> std::fmt::Debug for IndexBuilder<E, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexBuilder")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("partition", &self.partition)
            .field("sort", &self.sort)
            .field("encoding", &self.encoding.is_some())
            .finish()
    }
}
