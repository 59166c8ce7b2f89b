//! This crate provides the derive macro for AsRecord.

use proc_macro::TokenStream;

mod as_record;
use as_record::as_record;

#[proc_macro_derive(AsRecord)]
pub fn derive_as_record(input: TokenStream) -> TokenStream {
    as_record(input)
}
