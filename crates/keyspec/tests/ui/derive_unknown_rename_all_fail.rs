use keyspec::FieldValues;

#[derive(FieldValues)]
#[keyspec(rename_all = "SCREAMING")]
struct User {
    name: String,
}

fn main() {}
