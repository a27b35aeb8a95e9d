//! Parse implementation for `#[interpolate(...)]` arguments.
//!
//! Arguments are a comma-separated list of flags. A bare flag means `true`;
//! `flag = false` sets it explicitly.

use strsim::levenshtein;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitBool, Token};

use crate::input::{InterpolateArgs, OPTIONS};

struct Flag {
    name: Ident,
    value: Option<LitBool>,
}

impl Parse for Flag {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Flag { name, value })
    }
}

impl Parse for InterpolateArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let flags: Punctuated<Flag, Token![,]> = Punctuated::parse_terminated(input)?;

        let mut args = InterpolateArgs::default();
        let mut seen: Vec<String> = Vec::new();
        for flag in flags {
            let key = flag.name.to_string();
            if seen.contains(&key) {
                return Err(syn::Error::new(
                    flag.name.span(),
                    format!("duplicate option '{key}'"),
                ));
            }
            let value = flag.value.as_ref().is_none_or(LitBool::value);
            match key.as_str() {
                "explicit_to_string" => args.explicit_to_string = value,
                "backslash_escapes" => args.backslash_escapes = value,
                _ => return Err(syn::Error::new(flag.name.span(), unknown_option(&key))),
            }
            seen.push(key);
        }
        Ok(args)
    }
}

fn unknown_option(key: &str) -> String {
    let mut msg = format!("unknown option '{key}'");
    let closest = OPTIONS
        .iter()
        .map(|option| (levenshtein(key, option), option))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist);
    match closest {
        Some((_, option)) => msg.push_str(&format!("\nhelp: did you mean '{option}'?")),
        None => msg.push_str(&format!("\nnote: available options: {}", OPTIONS.join(", "))),
    }
    msg
}
