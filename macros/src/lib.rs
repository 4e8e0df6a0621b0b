use proc_macro::TokenStream;
use quote::quote;

/// Generate a three component color model from a struct declaration.
///
/// The three fields are made public and the model gets a `new` constructor,
/// conversions to and from `Components` and the derives every model shares.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one per component.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));
    input.attrs.push(syn::parse_quote!(
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    ));

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this notation.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
