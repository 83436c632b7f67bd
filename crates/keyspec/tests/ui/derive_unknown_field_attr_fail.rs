use keyspec::FieldValues;

#[derive(FieldValues)]
struct User {
    #[keyspec(default = "anonymous")]
    name: String,
}

fn main() {}
