use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, LitStr};

const NAMED_ONLY: &str = "FieldValues can only be derived for structs with named fields";

// derive_field_values
pub fn derive_field_values(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(unnamed) => return Err(Error::new_spanned(unnamed, NAMED_ONLY)),
            Fields::Unit => return Err(Error::new_spanned(&input.ident, NAMED_ONLY)),
        },
        _ => return Err(Error::new_spanned(&input.ident, NAMED_ONLY)),
    };

    let container = ContainerAttrs::parse(&input.attrs)?;

    let mut by_name_match_arms = Vec::with_capacity(fields.len());
    let mut names = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = FieldAttrs::parse(field)?;
        if attrs.skip {
            continue;
        }

        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = match attrs.rename {
            Some(name) => name,
            None => container.field_name(&field_ident.to_string()),
        };

        if names.contains(&field_name) {
            return Err(Error::new_spanned(
                field_ident,
                format!("duplicate key field name `{field_name}`"),
            ));
        }

        by_name_match_arms.push(quote! {
            #field_name => Some(SegmentValue::to_segment(&self.#field_ident)),
        });
        names.push(field_name);
    }

    Ok(quote! {
        impl #impl_generics ::keyspec::traits::FieldValues for #ident #ty_generics #where_clause {
            fn get_segment(&self, field: &str) -> Option<::keyspec::segment::Segment> {
                use ::keyspec::traits::SegmentValue;

                match field {
                    #(#by_name_match_arms)*
                    _ => None,
                }
            }
        }
    })
}

///
/// ContainerAttrs
///

#[derive(Default)]
struct ContainerAttrs {
    rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("keyspec")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = Some(RenameRule::parse(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported keyspec container attribute"))
                }
            })?;
        }

        Ok(out)
    }

    fn field_name(&self, ident: &str) -> String {
        let ident = ident.strip_prefix("r#").unwrap_or(ident);

        match self.rename_all {
            Some(RenameRule::Camel) => ident.to_case(Case::Camel),
            Some(RenameRule::Pascal) => ident.to_case(Case::Pascal),
            Some(RenameRule::Snake) => ident.to_case(Case::Snake),
            Some(RenameRule::Kebab) => ident.to_case(Case::Kebab),
            None => ident.to_string(),
        }
    }
}

///
/// RenameRule
///

#[derive(Clone, Copy)]
enum RenameRule {
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self, Error> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            other => Err(Error::new_spanned(
                lit,
                format!("unsupported rename_all case `{other}`"),
            )),
        }
    }
}

///
/// FieldAttrs
///

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(field: &Field) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("keyspec")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported keyspec field attribute"))
                }
            })?;
        }

        Ok(out)
    }
}
