use keyspec::{FieldValues, SegmentValue, prelude::*};

#[derive(FieldValues)]
struct Tagged<T: SegmentValue> {
    tag: T,
    r#type: &'static str,
}

fn main() {
    let tagged = Tagged {
        tag: 7u32,
        r#type: "order",
    };

    assert_eq!(tagged.get_segment("tag"), Some(Segment::Int(7)));
    assert_eq!(tagged.get_segment("type"), Some(Segment::from("order")));
    assert_eq!(tagged.get_segment("missing"), None);
}
