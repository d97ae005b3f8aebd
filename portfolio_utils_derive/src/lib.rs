use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Wraps a function in a [`tracing::instrument`] span which records the
/// return value at trace level and emits a `call` event on entry.
///
/// Arguments are forwarded to `#[tracing::instrument(...)]`, so the usual
/// `skip(...)`, `fields(...)` etc. work as expected. Crates using this
/// attribute must depend on `tracing`.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    quote! {
        #[::tracing::instrument(ret(level = "trace"), #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
