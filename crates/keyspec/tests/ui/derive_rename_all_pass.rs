use keyspec::prelude::*;

#[derive(FieldValues)]
#[keyspec(rename_all = "kebab-case")]
struct Order {
    order_id: u64,
    placed_at: Option<i64>,
}

fn main() {
    let order = Order {
        order_id: 1,
        placed_at: None,
    };

    assert_eq!(order.get_segment("order-id"), Some(Segment::Int(1)));
    assert_eq!(order.get_segment("placed-at"), Some(Segment::Null));
    assert_eq!(order.get_segment("order_id"), None);
}
