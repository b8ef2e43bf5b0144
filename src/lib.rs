//! stdkit is a small set of building blocks shared by services: a validated
//! [`Email`] value type, masking helpers, a two-kind error type and fan-out
//! helpers.
//!
//! ```rust
//! use stdkit::Email;
//!
//! let email = Email::parse("t.e.s.t+tag@example.com")?;
//! assert_eq!(email.local_part(), "t.e.s.t+tag");
//! assert_eq!(email.domain_part(), "example.com");
//! # Ok::<(), stdkit::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, unused_mut)]

pub mod email;
pub mod error;
pub mod mask;
pub mod sync;

#[allow(missing_docs)]
pub mod config;
pub mod telemetry;

pub use email::Email;
pub use error::{Error, Result};
