use plume_derive::plume_error;
use std::borrow::Cow;

#[plume_error]
pub enum ParseError {
    #[error("Number error{}: {source}", format_context(.context))]
    Number {
        #[source]
        source: std::num::ParseFloatError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
