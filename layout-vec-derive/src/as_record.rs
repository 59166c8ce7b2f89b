use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Generics, Ident, Index, Type, parse_macro_input, spanned::Spanned};

/// The largest record arity layout-vec implements.
const MAX_FIELDS: usize = 12;

pub fn as_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = parse_macro_input!(input);
    match as_record_derive(input) {
        Ok(tokens) => tokens,
        Err(e) => e.into_compile_error(),
    }
    .into()
}

fn as_record_derive(input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let DeriveInput {
        ident,
        data,
        generics,
        ..
    } = input;

    let strukt = match data {
        Data::Struct(strukt) => strukt,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "AsRecord only applies to structs",
            ));
        }
    };

    let fields = strukt.fields;
    if fields.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "AsRecord needs at least one field",
        ));
    }
    if fields.len() > MAX_FIELDS {
        return Err(syn::Error::new(
            fields.span(),
            format!("AsRecord supports at most {MAX_FIELDS} fields"),
        ));
    }

    let members: Vec<_> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field
                .ident
                .clone()
                .map(syn::Member::Named)
                .unwrap_or_else(|| {
                    syn::Member::Unnamed(Index {
                        index: i as u32,
                        span: field.span(),
                    })
                })
        })
        .collect();
    let types: Vec<_> = fields.iter().map(|field| field.ty.clone()).collect();

    Ok(generate_impl(ident, generics, members, types))
}

fn generate_impl(
    ident: Ident,
    generics: Generics,
    members: Vec<syn::Member>,
    types: Vec<Type>,
) -> TokenStream2 {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let positions = (0..members.len()).map(Index::from);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::layout_vec::AsRecord for #ident #ty_generics #where_clause {
            type Record = (#(#types,)*);

            fn into_record(self) -> Self::Record {
                (#(self.#members,)*)
            }

            fn from_record(record: Self::Record) -> Self {
                Self {
                    #(
                    #members: record.#positions,
                    )*
                }
            }
        }
    }
}
