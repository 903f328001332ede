//! Kernel utilities shared by Plume applications.
//! Keep this crate lightweight: it owns layered configuration loading and identifier
//! generation.
//!
//! ## Config loading
//! ```rust,no_run
//! use plume_kernel::config::load_config;
//! use plume_kernel::domain::config::PlumeConfig;
//!
//! let cfg: PlumeConfig = load_config(Some("plume.toml")).unwrap_or_default();
//! assert!(!cfg.logging.level.is_empty());
//! ```
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use plume_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
pub mod config;

// No visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use nanoid::nanoid;
pub use plume_domain as domain;

/// Generates an unambiguous `NanoID` over [`SAFE_ALPHABET`] (12 characters by default).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
