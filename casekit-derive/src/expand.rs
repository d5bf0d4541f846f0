use std::collections::HashSet;

use casekit::Case;
use darling::{FromField, FromMeta, util::Flag};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Field, Fields, Ident, ItemStruct, LitStr, Result, ext::IdentExt};

use crate::utils::to_screaming_snake;

/// The name of the field attribute.
const FIELD_ATTR_NAME: &str = "field_name";

/// The name of the generated constant holding all field names.
const FIELD_NAMES_CONST: &str = "FIELD_NAMES";

#[derive(FromMeta, Debug)]
#[darling(derive_syn_parse)]
pub(super) struct FieldNamesAttr {
    /// The case to generate the field names in.
    case: LitStr,
}

impl FieldNamesAttr {
    fn case(&self) -> Result<Case> {
        let value = self.case.value();
        match value.parse::<Case>() {
            Ok(Case::None) | Err(_) => Err(syn::Error::new_spanned(
                &self.case,
                format!("Unsupported case '{}'. Use camel, kebab, or snake", value),
            )),
            Ok(case) => Ok(case),
        }
    }
}

#[derive(FromField)]
#[darling(attributes(field_name))]
struct NamedField {
    /// The identifier of the field.
    ident: Option<Ident>,
    /// The literal name to use instead of the converted identifier.
    rename: Option<String>,
    /// Leave the field out of the generated names.
    skip: Flag,
}

/// The generated name of a single field.
struct FieldName {
    /// The identifier of the field, without any `r#` prefix.
    identifier: Ident,
    /// The identifier of the generated constant.
    const_ident: Ident,
    /// The field name in the target case, or the rename.
    name: String,
}

impl FieldName {
    fn try_from(field: &Field, case: Case) -> Result<Option<Self>> {
        let named_field = NamedField::from_field(field)?;
        if named_field.skip.is_present() {
            return Ok(None);
        }

        let identifier = named_field
            .ident
            .ok_or_else(|| syn::Error::new_spanned(field, "Expected an identifier"))?
            .unraw();

        let name = named_field
            .rename
            .unwrap_or_else(|| casekit::convert(&identifier.to_string(), case));

        let const_ident = format_ident!("{}", to_screaming_snake(&identifier.to_string()));

        Ok(Some(Self {
            identifier,
            const_ident,
            name,
        }))
    }

    fn build_const(&self, vis: &syn::Visibility, case: Case) -> TokenStream {
        let const_ident = &self.const_ident;
        let name = &self.name;
        let doc = format!(
            "Name of the `{}` field. Generated in {} case unless renamed.",
            self.identifier, case
        );

        quote! {
            #[doc = #doc]
            #vis const #const_ident: &'static str = #name;
        }
    }
}

fn case_path(case: Case) -> TokenStream {
    match case {
        Case::Camel => quote! { ::casekit::Case::Camel },
        Case::Kebab => quote! { ::casekit::Case::Kebab },
        Case::Snake => quote! { ::casekit::Case::Snake },
        Case::None => quote! { ::casekit::Case::None },
    }
}

pub fn expand(attr: FieldNamesAttr, input: &mut ItemStruct) -> Result<TokenStream> {
    let case = attr.case()?;

    let Fields::Named(fields) = &mut input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Expected a struct with named fields",
        ));
    };

    let mut names = Vec::with_capacity(fields.named.len());
    let mut consts = Vec::with_capacity(fields.named.len());
    let mut seen_names = HashSet::new();
    let mut seen_consts = HashSet::new();

    // The visibility of the annotated struct
    let vis = &input.vis;

    for field in fields.named.iter_mut() {
        if let Some(field_name) = FieldName::try_from(field, case)? {
            if field_name.const_ident == FIELD_NAMES_CONST
                || !seen_consts.insert(field_name.const_ident.to_string())
            {
                return Err(syn::Error::new_spanned(
                    &*field,
                    format!("Constant '{}' is generated twice", field_name.const_ident),
                ));
            }

            if !seen_names.insert(field_name.name.clone()) {
                return Err(syn::Error::new_spanned(
                    &*field,
                    format!("Duplicate field name '{}'", field_name.name),
                ));
            }

            consts.push(field_name.build_const(vis, case));
            names.push(field_name.name);
        }

        // Remove the field attribute from the field.
        field
            .attrs
            .retain(|attr| !attr.path().is_ident(FIELD_ATTR_NAME));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let case_path = case_path(case);
    let field_names_ident = format_ident!("{}", FIELD_NAMES_CONST);
    let field_names_doc = format!("Names of the fields of [`{}`], in {} case.", ident, case);

    Ok(quote! {
        #input

        impl #impl_generics #ident #ty_generics #where_clause {
            #(#consts)*

            #[doc = #field_names_doc]
            #vis const #field_names_ident: &'static [&'static str] = &[#(#names),*];
        }

        impl #impl_generics ::casekit::FieldNames for #ident #ty_generics #where_clause {
            const CASE: ::casekit::Case = #case_path;

            fn field_names() -> &'static [&'static str] {
                Self::#field_names_ident
            }
        }
    })
}
