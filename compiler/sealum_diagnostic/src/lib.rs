//! Diagnostic system for hierarchy planning failures.
//!
//! Planning never panics on bad input. Every structural problem becomes a
//! [`Failure`]: pure data naming the annotated root, the offending
//! declaration, the [`FailureKind`], and a source position. Failures from
//! many roots are collected in a [`FailureLog`], sorted for reproducible
//! output, and rendered as [`Diagnostic`]s by an emitter.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one failure was
//! recorded, so a build pass cannot end in failure without saying why.
//!
//! ```text
//! let outcome = session.process(&query, &holders);
//! let plans = outcome.finish()?; // Err(ErrorGuaranteed) if anything failed
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod failure;
mod guarantee;
mod log;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use failure::{Failure, FailureKind};
pub use guarantee::ErrorGuaranteed;
pub use log::FailureLog;
