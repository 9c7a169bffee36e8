//! Closed-hierarchy planning.
//!
//! Turns an annotated holder declaration into a [`GenerationPlan`]:
//!
//! ```text
//! holder ──► validate::resolve_root ──► build::build ──► HierarchySpec
//!                                                            │
//!            order requests ──► assemble::assemble ◄─────────┘
//!                                      │
//!                                      ▼
//!                               GenerationPlan
//! ```
//!
//! The host symbol model is reached only through [`HierarchyQuery`]. Every
//! policy decision lives here; the query side reports facts and validates
//! nothing. Structural problems come back as [`Failure`] values, collected
//! so one pass reports every violation of a root.

mod assemble;
mod build;
pub mod memory;
mod order;
mod query;
mod stack;
mod validate;

pub use assemble::{assemble, interface_closure, lookup_names};
pub use build::{build, merge_passes};
pub use memory::MemoryHierarchy;
pub use order::flatten;
pub use query::{DeclarationPasses, HierarchyQuery};
pub use validate::{check_unique_requests, resolve_root, validate_spec, RootShape};

use sealum_diagnostic::Failure;
use sealum_ir::{DeclName, GenerationPlan, OrderRequest};

/// Plan one annotated holder end to end.
///
/// Request uniqueness is checked before anything else: a holder with a
/// repeated policy is not built at all.
#[tracing::instrument(level = "debug", skip_all, fields(holder = %holder))]
pub fn plan<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
) -> Result<GenerationPlan, Vec<Failure>> {
    let requests = sorted_requests(query, holder);
    check_unique_requests(holder, &requests)?;
    let spec = build(query, holder)?;
    assemble(query, spec, &requests)
}

/// Requests of `holder` as written, sorted by position.
pub fn sorted_requests<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
) -> Vec<OrderRequest> {
    let mut requests = query.order_requests(holder);
    requests.sort_by(|a, b| a.position.cmp(&b.position));
    requests
}
