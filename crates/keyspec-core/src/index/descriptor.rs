use crate::{
    index::{IndexKind, KeyPart, KeySpec},
    obs::sink::{self, MetricsEvent},
    segment::Segment,
    traits::FieldValues,
    values::Values,
};
use std::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
    sync::Arc,
};

/// Caller-supplied encoder: `[prefix, segment_1, .., segment_n]` in, key out.
pub type EncodingMethod<K> = Arc<dyn Fn(&[Segment]) -> K + Send + Sync>;

///
/// IndexKeys
///
/// Partition and sort key computed together for one entity.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IndexKeys<K> {
    pub partition: K,
    pub sort: K,
}

///
/// IndexDescriptor
///
/// A fully configured index. Only produced by `IndexBuilder::build`, and
/// immutable afterwards; every key computation is a pure function of the
/// input fields.
///

pub struct IndexDescriptor<E, K = String> {
    kind: IndexKind,
    name: String,
    partition: KeySpec,
    sort: KeySpec,
    encoding: EncodingMethod<K>,
    _marker: PhantomData<fn() -> E>,
}

impl<E, K> IndexDescriptor<E, K> {
    pub(crate) fn new(
        kind: IndexKind,
        name: String,
        partition: KeySpec,
        sort: KeySpec,
        encoding: EncodingMethod<K>,
    ) -> Self {
        Self {
            kind,
            name,
            partition,
            sort,
            encoding,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> IndexKind {
        self.kind
    }

    #[must_use]
    pub const fn partition_spec(&self) -> &KeySpec {
        &self.partition
    }

    #[must_use]
    pub const fn sort_spec(&self) -> &KeySpec {
        &self.sort
    }

    /// Encode the partition key.
    ///
    /// Every field of the partition spec is expected to be supplied; a field
    /// the input does not have is passed to the encoder as `Segment::Null`.
    pub fn partition_key<V: FieldValues + ?Sized>(&self, fields: &V) -> K {
        let values = self.partition.resolve(fields);
        let segments = self.partition.segments(&values);

        let key = (self.encoding)(&segments);
        self.record(KeyPart::Partition, segments.len(), 0);

        key
    }

    /// Encode a possibly partial sort key.
    ///
    /// Fields that are absent or null are dropped and the rest keep their
    /// relative order. Whether the resulting sparse key matches how records
    /// are actually stored is up to the caller.
    pub fn sort_key<V: FieldValues + ?Sized>(&self, fields: &V) -> K {
        let values = self.sort.resolve(fields);
        let mut segments = self.sort.segments(&values);

        let before = segments.len();
        segments.retain(|segment| !segment.is_null());
        let dropped = before - segments.len();

        let key = (self.encoding)(&segments);
        self.record(KeyPart::Sort, segments.len(), dropped);

        key
    }

    /// Sort key with no fields supplied: the prefix plus whatever the
    /// transform fills in.
    pub fn sort_key_prefix(&self) -> K {
        self.sort_key(&Values::new())
    }

    /// Both keys for one entity.
    pub fn keys<V: FieldValues + ?Sized>(&self, entity: &V) -> IndexKeys<K> {
        IndexKeys {
            partition: self.partition_key(entity),
            sort: self.sort_key(entity),
        }
    }

    fn record(&self, part: KeyPart, segments: usize, dropped: usize) {
        sink::record(MetricsEvent::KeyEncoded {
            kind: self.kind,
            index: &self.name,
            part,
            segments,
            dropped,
        });
    }
}

impl<E, K> Clone for IndexDescriptor<E, K> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            partition: self.partition.clone(),
            sort: self.sort.clone(),
            encoding: Arc::clone(&self.encoding),
            _marker: PhantomData,
        }
    }
}

impl<E, K> Debug for IndexDescriptor<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("partition", &self.partition)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl<E, K> Display for IndexDescriptor<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.kind, self.name, self.partition, self.sort
        )
    }
}
