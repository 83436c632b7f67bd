use keyspec::FieldValues;

#[derive(FieldValues)]
struct Marker;

fn main() {}
