//! # Schema Errors
//!
//! [`SchemaError`] covers schema definition mistakes (caught when a catalog is built)
//! and rejected lookups or assignments at runtime. Rendering itself never fails.

use std::borrow::Cow;

#[plume_derive::plume_error]
pub enum SchemaError {
    /// A field key that the section does not declare.
    #[error("Unknown field{}: {message}", format_context(.context))]
    UnknownField { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A section tag that is not part of the catalog or document.
    #[error("Unknown section{}: {message}", format_context(.context))]
    UnknownSection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A value whose type differs from the field's declared type.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An enumeration value outside the declared choice list.
    #[error("Invalid choice{}: {message}", format_context(.context))]
    InvalidChoice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Textual input that cannot be parsed into the field type.
    #[error("Invalid value{}: {message}", format_context(.context))]
    InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two catalog entries share a section tag.
    #[error("Duplicate section{}: {message}", format_context(.context))]
    DuplicateSection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A malformed schema or override table definition.
    #[error("Invalid schema{}: {message}", format_context(.context))]
    InvalidSchema { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal schema error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
