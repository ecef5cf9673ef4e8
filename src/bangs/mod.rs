//! Bang definitions and the registry the resolution engine reads from
//!
//! ## Key Components
//!
//! - [`BangDefinition`] - One trigger with its display domain and URL template
//! - [`BangRegistry`] - Built-in table followed by user-added bangs, first match wins
//! - [`builtin_bangs`] - The static table shipped with the service
//! - [`CustomBang`] - Validation for user-added bangs before they are persisted
//!
//! ## Example
//!
//! ```rust
//! use quackly::bangs::BangRegistry;
//!
//! let registry = BangRegistry::with_builtins();
//! let google = registry.get("g").expect("built-in");
//! assert_eq!(google.domain, "google.com");
//! ```

mod builtin;
mod custom;
mod registry;
mod types;

pub use builtin::builtin_bangs;
pub use custom::{BangError, CustomBang, FALLBACK_DOMAIN, clean_trigger};
pub use registry::BangRegistry;
pub use types::{BangDefinition, PLACEHOLDERS};
