use proc_macro::TokenStream;
use syn::{ItemStruct, parse_macro_input};

use crate::expand::FieldNamesAttr;

mod expand;
mod utils;

/// This macro generates the names of a struct's fields in a target case convention.
///
/// ```rust
/// use casekit::FieldNames;
///
/// #[casekit_derive::field_names(case = "camel")]
/// struct User {
///     user_id: u64,
///     #[field_name(rename = "mail")]
///     email_address: String,
///     #[field_name(skip)]
///     password_hash: String,
/// }
///
/// assert_eq!(User::USER_ID, "userId");
/// assert_eq!(User::EMAIL_ADDRESS, "mail");
/// assert_eq!(User::field_names(), &["userId", "mail"]);
/// ```
#[proc_macro_attribute]
pub fn field_names(attr: TokenStream, item: TokenStream) -> TokenStream {
    // NOTE: We use `proc_macro_attribute` here because the `#[field_name]` helper attributes have to be
    // stripped from the struct.
    let mut input = parse_macro_input!(item as ItemStruct);

    let attributes: FieldNamesAttr = match syn::parse(attr) {
        Ok(v) => v,
        Err(e) => {
            return e.to_compile_error().into();
        }
    };

    expand::expand(attributes, &mut input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
