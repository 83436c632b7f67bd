use crate::segment::Segment;
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

///
/// SegmentValue
///
/// Conversion boundary for anything that can land in an encoded key.
///

pub trait SegmentValue {
    fn to_segment(&self) -> Segment;
}

impl SegmentValue for Segment {
    fn to_segment(&self) -> Segment {
        self.clone()
    }
}

impl SegmentValue for str {
    fn to_segment(&self) -> Segment {
        Segment::Text(self.to_string())
    }
}

impl SegmentValue for &str {
    fn to_segment(&self) -> Segment {
        Segment::Text((*self).to_string())
    }
}

impl SegmentValue for String {
    fn to_segment(&self) -> Segment {
        Segment::Text(self.clone())
    }
}

impl<T: SegmentValue> SegmentValue for Option<T> {
    fn to_segment(&self) -> Segment {
        self.as_ref().map_or(Segment::Null, SegmentValue::to_segment)
    }
}

impl<T: SegmentValue + ?Sized> SegmentValue for Box<T> {
    fn to_segment(&self) -> Segment {
        (**self).to_segment()
    }
}

macro_rules! impl_segment_value {
    ( $variant:ident => $target:ty: $( $ty:ty ),* $(,)? ) => {
        $(
            impl SegmentValue for $ty {
                fn to_segment(&self) -> Segment {
                    Segment::$variant(<$target>::from(*self))
                }
            }
        )*
    };
}

impl_segment_value!(Int => i64: i8, i16, i32, i64, u8, u16, u32);
impl_segment_value!(Float => f64: f32, f64);

impl SegmentValue for u64 {
    fn to_segment(&self) -> Segment {
        Segment::from_u64(*self)
    }
}

///
/// FieldValues
///
/// By-name field access for anything a key can be computed from.
/// `None` means the field does not exist on the value at all.
///

pub trait FieldValues {
    fn get_segment(&self, field: &str) -> Option<Segment>;
}

impl<T: FieldValues + ?Sized> FieldValues for &T {
    fn get_segment(&self, field: &str) -> Option<Segment> {
        (**self).get_segment(field)
    }
}

impl<T: FieldValues + ?Sized> FieldValues for Box<T> {
    fn get_segment(&self, field: &str) -> Option<Segment> {
        (**self).get_segment(field)
    }
}

impl<T: SegmentValue> FieldValues for BTreeMap<String, T> {
    fn get_segment(&self, field: &str) -> Option<Segment> {
        self.get(field).map(SegmentValue::to_segment)
    }
}

impl<T: SegmentValue, S: BuildHasher> FieldValues for HashMap<String, T, S> {
    fn get_segment(&self, field: &str) -> Option<Segment> {
        self.get(field).map(SegmentValue::to_segment)
    }
}
