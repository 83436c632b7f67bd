use keyspec::FieldValues;

#[derive(FieldValues)]
struct Pair(String, u64);

fn main() {}
