//! Expansion of the attribute macros.

use interpol_engine::{DEFAULT_CRATE_NAME, Markers, rewrite};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Attribute, Item};

use crate::input::InterpolateArgs;

/// Rewrite `item` as one compilation unit.
///
/// On failure the error is emitted next to the untouched item, so the only
/// diagnostic is the interpolation error itself rather than a cascade from a
/// half-rewritten body.
pub fn interpolate(args: &InterpolateArgs, item: TokenStream) -> TokenStream {
    let parsed: Item = match syn::parse2(item.clone()) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    match rewrite(parsed, &args.config()) {
        Ok(rewritten) => rewritten.into_unit().into_token_stream(),
        Err(err) => {
            let error = err.into_syn_error().to_compile_error();
            quote! {
                #error
                #item
            }
        }
    }
}

/// Strip `#[interpolate]` from an opted-out item.
pub fn opt_out(item: TokenStream) -> TokenStream {
    let Ok(mut parsed) = syn::parse2::<Item>(item.clone()) else {
        return item;
    };
    if let Some(attrs) = item_attrs_mut(&mut parsed) {
        Markers::new(DEFAULT_CRATE_NAME).strip(attrs);
    }
    parsed.into_token_stream()
}

fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(item) => Some(&mut item.attrs),
        Item::Enum(item) => Some(&mut item.attrs),
        Item::ExternCrate(item) => Some(&mut item.attrs),
        Item::Fn(item) => Some(&mut item.attrs),
        Item::ForeignMod(item) => Some(&mut item.attrs),
        Item::Impl(item) => Some(&mut item.attrs),
        Item::Macro(item) => Some(&mut item.attrs),
        Item::Mod(item) => Some(&mut item.attrs),
        Item::Static(item) => Some(&mut item.attrs),
        Item::Struct(item) => Some(&mut item.attrs),
        Item::Trait(item) => Some(&mut item.attrs),
        Item::TraitAlias(item) => Some(&mut item.attrs),
        Item::Type(item) => Some(&mut item.attrs),
        Item::Union(item) => Some(&mut item.attrs),
        Item::Use(item) => Some(&mut item.attrs),
        _ => None,
    }
}
