use keyspec::FieldValues;

#[derive(FieldValues)]
enum Status {
    Active,
    Archived,
}

fn main() {}
