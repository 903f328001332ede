#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by every Plume crate.
//!
//! Right now there is one: [`macro@plume_error`], which turns a plain enum into the
//! workspace's error shape (thiserror derive, `context(..)` extension trait, source
//! conversions).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! plume-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait with `.context(..)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every wrapped source type.
/// * **Source Conversions**: `From<Source>` for each variant carrying a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named** variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use plume_derive::plume_error;
/// use std::borrow::Cow;
///
/// #[plume_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading values file")
/// }
/// ```
#[proc_macro_attribute]
pub fn plume_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
