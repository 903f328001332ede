use plume_schema::SchemaError;
use std::borrow::Cow;

/// A specialized [`ProfileError`] enum of this crate.
#[plume_derive::plume_error]
pub enum ProfileError {
    /// No profile with the given id exists (or it was deleted).
    #[error("Profile not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Another profile already uses the title.
    #[error("Duplicate profile title{}: {message}", format_context(.context))]
    DuplicateTitle { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Rejected profile metadata (e.g. a blank title).
    #[error("Invalid profile{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A document edit or lookup failed.
    #[error("Profile document error{}: {source}", format_context(.context))]
    Schema { source: SchemaError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal profile error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
