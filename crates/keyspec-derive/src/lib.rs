use proc_macro::TokenStream;

mod field_values;

/// Derive by-name field access for a struct with named fields.
///
/// Field attributes:
/// - `#[keyspec(rename = "name")]` use `name` as the key field name
/// - `#[keyspec(skip)]` never expose the field
///
/// Struct attributes:
/// - `#[keyspec(rename_all = "camelCase")]` also `PascalCase`, `snake_case`, `kebab-case`
#[proc_macro_derive(FieldValues, attributes(keyspec))]
pub fn derive_field_values(input: TokenStream) -> TokenStream {
    field_values::derive_field_values(input.into()).into()
}
