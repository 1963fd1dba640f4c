//! Utility functions shared by the builder and the query engine.
//!
//! ## Modules
//!
//! - [`alphabet`] - Supported symbol range, word separator, boundary validation
//!
//! ```
//! use suggest::utils::validate_symbols;
//!
//! assert!(validate_symbols("hello").is_ok());
//! assert!(validate_symbols("h\u{e9}llo").is_err());
//! ```

pub mod alphabet;

pub use alphabet::*;
