
use crate::{
    segment::Segment,
    traits::{FieldValues, SegmentValue},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};

///
/// Values
///
/// A partial record keyed by field name. This is the shape key-spec
/// transforms receive and return, and the cheapest way to hand a sparse
/// set of sort-key fields to an index.
///
/// A field is *present* only when it maps to a non-null segment.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Values(BTreeMap<String, Segment>);

impl Values {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Copy the named fields out of `source`.
    /// Fields the source does not have are left out rather than nulled.
    #[must_use]
    pub fn pick<V, S>(source: &V, fields: &[S]) -> Self
    where
        V: FieldValues + ?Sized,
        S: AsRef<str>,
    {
        fields
            .iter()
            .filter_map(|field| {
                let field = field.as_ref();
                source
                    .get_segment(field)
                    .map(|segment| (field.to_string(), segment))
            })
            .collect()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl SegmentValue) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl SegmentValue) -> Option<Segment> {
        self.0.insert(field.into(), value.to_segment())
    }

    pub fn remove(&mut self, field: &str) -> Option<Segment> {
        self.0.remove(field)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Segment> {
        self.0.get(field)
    }

    #[must_use]
    pub fn is_present(&self, field: &str) -> bool {
        self.get(field).is_some_and(|segment| !segment.is_null())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Segment> {
        self.0.iter()
    }
}

impl FieldValues for Values {
    fn get_segment(&self, field: &str) -> Option<Segment> {
        self.0.get(field).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<Segment>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Values {
    type Item = (String, Segment);
    type IntoIter = btree_map::IntoIter<String, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a Segment);
    type IntoIter = btree_map::Iter<'a, String, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
