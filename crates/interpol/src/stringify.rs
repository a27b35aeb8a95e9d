//! Runtime support for `explicit_to_string` interpolation.
//!
//! Generated code calls `interpol_to_string` on `&Stringify(&value)` with both
//! traits in scope. Method lookup tries the receiver as written before taking
//! another reference, so an `Option` reaches [`OptionToString`] and any other
//! `Display` value reaches [`DisplayToString`].

use std::fmt::Display;

/// Text for an absent value.
pub const NULL: &str = "null";

/// A borrowed embedded value awaiting stringification.
pub struct Stringify<'a, T: ?Sized>(pub &'a T);

pub trait OptionToString {
    fn interpol_to_string(&self) -> String;
}

pub trait DisplayToString {
    fn interpol_to_string(&self) -> String;
}

impl<T: Display> OptionToString for Stringify<'_, Option<T>> {
    fn interpol_to_string(&self) -> String {
        match self.0 {
            Some(value) => value.to_string(),
            None => String::from(NULL),
        }
    }
}

impl<T: Display + ?Sized> DisplayToString for &Stringify<'_, T> {
    fn interpol_to_string(&self) -> String {
        self.0.to_string()
    }
}
