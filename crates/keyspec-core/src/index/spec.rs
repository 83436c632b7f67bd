use crate::{
    config::KeySpecConfig,
    segment::Segment,
    traits::FieldValues,
    values::Values,
};
use std::{
    fmt::{self, Debug, Display},
    sync::Arc,
};

/// Pure rewrite of the picked field values, run once before extraction.
pub type TransformValues = Arc<dyn Fn(Values) -> Values + Send + Sync>;

///
/// KeySpec
///
/// One half of an index key: a literal prefix followed by the values of
/// `fields`, in order. Used for both the partition and the sort key.
///

#[derive(Clone)]
pub struct KeySpec {
    prefix: String,
    fields: Vec<String>,
    transform: Option<TransformValues>,
}

impl KeySpec {
    #[must_use]
    pub fn new<I, S>(prefix: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            transform: None,
        }
    }

    /// Attach a transform. Its output replaces the input values entirely,
    /// so it must carry through any field it does not rewrite.
    ///
    /// The transform only sees this spec's own fields, picked from the
    /// caller's input. Other fields of the entity are not visible to it, so
    /// a key field cannot be derived from a non-key field here.
    #[must_use]
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Values) -> Values + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub const fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    // resolve
    // pick this spec's fields out of the input and run the transform
    pub(crate) fn resolve<V: FieldValues + ?Sized>(&self, input: &V) -> Values {
        let picked = Values::pick(input, &self.fields);

        match &self.transform {
            Some(transform) => transform(picked),
            None => picked,
        }
    }

    /// Prefix first, then one segment per field; absent fields become `Null`.
    pub(crate) fn segments(&self, values: &Values) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.fields.len() + 1);
        segments.push(Segment::Text(self.prefix.clone()));
        segments.extend(
            self.fields
                .iter()
                .map(|field| values.get(field).cloned().unwrap_or(Segment::Null)),
        );

        segments
    }
}

impl From<KeySpecConfig> for KeySpec {
    fn from(config: KeySpecConfig) -> Self {
        Self::new(config.prefix, config.fields)
    }
}

impl From<&KeySpecConfig> for KeySpec {
    fn from(config: &KeySpecConfig) -> Self {
        Self::new(config.prefix.clone(), config.fields.iter().cloned())
    }
}

impl Debug for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySpec")
            .field("prefix", &self.prefix)
            .field("fields", &self.fields)
            .field("transform", &self.has_transform())
            .finish()
    }
}

impl Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.prefix, self.fields.join(", "))
    }
}
