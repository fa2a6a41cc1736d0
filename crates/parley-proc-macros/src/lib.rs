// parley/parley-proc-macros
//
// Copyright: 2026, The Parley Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, Meta};

/// Implements `From<&AppDependencies>` for a service struct.
///
/// Fields marked with `#[inject]` are cloned from the field with the same name in
/// `crate::app::deps::AppDependencies`. Fields marked with `#[inject(from_deps)]` are built from
/// the dependencies themselves via their own `From<&AppDependencies>` implementation. All other
/// fields are initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let Data::Struct(struct_data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "InjectDependencies only supports structs.")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return syn::Error::new_spanned(
            &input.ident,
            "InjectDependencies only supports structs with named fields.",
        )
        .to_compile_error()
        .into();
    };

    let mut field_initialization = Vec::with_capacity(fields.named.len());

    for field in fields.named.iter() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let inject_attr = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("inject"));

        let initialization = match inject_attr.map(inject_mode) {
            None => quote! { #ident: Default::default() },
            Some(Ok(InjectMode::Clone)) => quote! { #ident: deps.#ident.clone() },
            Some(Ok(InjectMode::FromDeps)) => quote! { #ident: From::from(deps) },
            Some(Err(error)) => return error.to_compile_error().into(),
        };
        field_initialization.push(initialization);
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics From<&crate::app::deps::AppDependencies> for #name #ty_generics #where_clause {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

enum InjectMode {
    Clone,
    FromDeps,
}

fn inject_mode(attr: &Attribute) -> syn::Result<InjectMode> {
    if matches!(attr.meta, Meta::Path(_)) {
        return Ok(InjectMode::Clone);
    }

    let mode = attr.parse_args::<Ident>()?;
    if mode == "from_deps" {
        return Ok(InjectMode::FromDeps);
    }

    Err(syn::Error::new_spanned(
        mode,
        "Expected either `#[inject]` or `#[inject(from_deps)]`.",
    ))
}
