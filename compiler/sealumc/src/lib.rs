//! Batch driver for the sealum planner.
//!
//! A build pass hands over the holders it found annotated and a
//! [`HierarchyQuery`](sealum_plan::HierarchyQuery) over its symbol model:
//!
//! ```text
//! let options = ProcessorOptions::from_map(host_options)?;
//! let outcome = Session::new(options).process(&query, &holders);
//! report(&outcome.failures, &options, &mut TerminalEmitter::stderr(ColorMode::Auto, true));
//! for plan in outcome.finish()? { emit(plan) }
//! ```

mod options;
mod policies;
mod report;
mod session;
mod tracing_setup;

pub use options::{
    OptionsError, ProcessorOptions, DISABLED_KEY, ERROR_LIMIT_KEY, PARALLEL_KEY,
};
pub use policies::describe_policies;
pub use report::report;
pub use session::{BatchOutcome, Session};
pub use tracing_setup::init_tracing;
