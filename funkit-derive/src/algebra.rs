//! Implementation of `#[derive(Semigroup)]` and `#[derive(Monoid)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Generics, Index, parse_macro_input, parse_quote};

/// Main implementation of the Semigroup derive macro.
pub fn derive_semigroup_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match struct_fields(&input, "Semigroup") {
        Ok(fields) => generate_semigroup(&input, fields),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Main implementation of the Monoid derive macro.
pub fn derive_monoid_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match struct_fields(&input, "Monoid") {
        Ok(fields) => generate_monoid(&input, fields),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn struct_fields<'a>(input: &'a DeriveInput, trait_name: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data_struct) => Ok(&data_struct.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{trait_name} can only be derived for structs, not enums."),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{trait_name} cannot be derived for unions."),
        )),
    }
}

/// Adds `FieldType: bound` to the where clause for every field.
fn bounded_generics(generics: &Generics, fields: &Fields, bound: &TokenStream2) -> Generics {
    let mut generics = generics.clone();
    let where_clause = generics.make_where_clause();
    for field in fields {
        let field_type = &field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#field_type: #bound));
    }
    generics
}

fn generate_semigroup(input: &DeriveInput, fields: &Fields) -> TokenStream2 {
    let name = &input.ident;
    let bound = quote!(::funkit::typeclass::Semigroup);
    let generics = bounded_generics(&input.generics, fields, &bound);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let body = match fields {
        Fields::Named(named_fields) => {
            let names: Vec<_> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            quote! {
                Self {
                    #(#names: ::funkit::typeclass::Semigroup::combine(self.#names, other.#names),)*
                }
            }
        }
        Fields::Unnamed(unnamed_fields) => {
            let indices = (0..unnamed_fields.unnamed.len()).map(Index::from);
            quote! {
                Self(#(::funkit::typeclass::Semigroup::combine(self.#indices, other.#indices),)*)
            }
        }
        Fields::Unit => quote!(Self),
    };

    quote! {
        impl #impl_generics #bound for #name #type_generics #where_clause {
            #[allow(unused_variables)]
            fn combine(self, other: Self) -> Self {
                #body
            }
        }
    }
}

fn generate_monoid(input: &DeriveInput, fields: &Fields) -> TokenStream2 {
    let name = &input.ident;
    let bound = quote!(::funkit::typeclass::Monoid);
    let generics = bounded_generics(&input.generics, fields, &bound);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let body = match fields {
        Fields::Named(named_fields) => {
            let names = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref());
            quote! {
                Self {
                    #(#names: ::funkit::typeclass::Monoid::empty(),)*
                }
            }
        }
        Fields::Unnamed(unnamed_fields) => {
            let empties = unnamed_fields
                .unnamed
                .iter()
                .map(|_| quote!(::funkit::typeclass::Monoid::empty()));
            quote!(Self(#(#empties,)*))
        }
        Fields::Unit => quote!(Self),
    };

    quote! {
        impl #impl_generics #bound for #name #type_generics #where_clause {
            fn empty() -> Self {
                #body
            }
        }
    }
}
