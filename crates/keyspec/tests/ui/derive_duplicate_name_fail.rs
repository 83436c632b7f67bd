use keyspec::FieldValues;

#[derive(FieldValues)]
#[keyspec(rename_all = "camelCase")]
struct User {
    first_name: String,
    #[keyspec(rename = "firstName")]
    given_name: String,
}

fn main() {}
