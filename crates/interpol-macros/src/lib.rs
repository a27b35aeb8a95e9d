use proc_macro::TokenStream;

mod expand;
mod input;
mod parse;

/// Enables `${expr}` interpolation in every string literal of the item.
///
/// The item is rewritten as one unit before type checking: each literal
/// containing markers becomes an expression that builds the same text, with
/// the embedded expressions evaluated in place.
///
/// # Options
///
/// - `explicit_to_string`: an `Option` of a `Display` type renders its
///   content, or `"null"` for `None`. Other `Display` values render as usual.
/// - `backslash_escapes = false`: keep `\$` as two ordinary characters
///   instead of a literal `$`.
///
/// # Example
///
/// ```ignore
/// #[interpolate]
/// fn greet(name: &str) -> String {
///     "Hello, ${name}!"
/// }
/// ```
#[proc_macro_attribute]
pub fn interpolate(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(args as input::InterpolateArgs);
    expand::interpolate(&args, item.into()).into()
}

/// Disables interpolation for a declaration and everything nested in it.
///
/// Inside an `#[interpolate]` item the marker is read and removed by the
/// rewriter. Used on its own, it strips any `#[interpolate]` below it so the
/// item stays opted out whatever the attribute order.
#[proc_macro_attribute]
pub fn no_interpolation(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "`no_interpolation` takes no arguments")
            .to_compile_error()
            .into();
    }
    expand::opt_out(item.into()).into()
}
