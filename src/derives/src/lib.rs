use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(DbTable)]
pub fn derive_db_table(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let singular = ident.to_string().to_lowercase();
    let plural = singular.clone() + "s";
    quote! {
        impl DbTable for #ident {
            const NAME_SINGULAR: &'static str = #singular;
            const NAME_PLURAL: &'static str = #plural;
        }
    }
    .into()
}

// Expects the entity to have an `id` field of the crate's Uuid newtype.
#[proc_macro_derive(Id)]
pub fn derive_id(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    quote! {
        impl Id for #ident {
            fn id(&self) -> crate::types::uuid::Uuid {
                self.id.clone()
            }
        }
    }
    .into()
}
