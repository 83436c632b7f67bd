use keyspec::FieldValues;

#[derive(FieldValues)]
#[keyspec(prefix = "users")]
struct User {
    name: String,
}

fn main() {}
