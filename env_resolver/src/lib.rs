//! Typed lookup of process environment variables.
//!
//! The crate exposes one operation, [`resolve`], which reads a variable from
//! the process environment, enforces a required/optional policy, and converts
//! the raw string into an [`EnvValue`] selected by an [`EnvType`] tag.
//! [`require`] and [`optional`] cover the plain-string common case.
//!
//! ```
//! use env_resolver::{resolve, EnvType, EnvValue};
//!
//! unsafe { std::env::set_var("WORKER_SHARDS", "1,2,3") };
//! let shards = resolve("WORKER_SHARDS", true, EnvType::ListInt).unwrap();
//! assert_eq!(shards, EnvValue::ListInt(vec![1, 2, 3]));
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod resolver;

pub use error::EnvVarError;
pub use resolver::{EnvType, EnvValue, optional, require, resolve};
