//! One build pass over a batch of annotated holders.
//!
//! Holders are independent: each is planned on its own, possibly on a
//! worker thread, and reports into a shared [`FailureLog`]. Results are
//! merged in root order afterwards so output never depends on which
//! worker finished first.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use sealum_diagnostic::{ErrorGuaranteed, Failure, FailureLog};
use sealum_ir::{DeclName, GenerationPlan};
use sealum_plan::HierarchyQuery;

use crate::ProcessorOptions;

/// Stack size for pool workers; deep hierarchies recurse.
const WORKER_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Everything one pass produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// One plan per holder that validated, sorted by root.
    pub plans: Vec<GenerationPlan>,
    /// Every failure, sorted by holder then position.
    pub failures: Vec<Failure>,
}

impl BatchOutcome {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn plan_for(&self, root: &DeclName) -> Option<&GenerationPlan> {
        self.plans.iter().find(|plan| plan.root() == root)
    }

    /// Failures recorded while planning `holder`.
    pub fn failures_for<'a>(&'a self, holder: &'a DeclName) -> impl Iterator<Item = &'a Failure> {
        self.failures.iter().filter(move |failure| &failure.root == holder)
    }

    /// End the pass: the plans, or proof that failures were recorded.
    ///
    /// Plans of valid holders are still in `self.plans` for callers that
    /// emit per root before deciding the pass outcome.
    pub fn finish(self) -> Result<Vec<GenerationPlan>, ErrorGuaranteed> {
        match ErrorGuaranteed::from_error_count(self.failures.len()) {
            Some(guarantee) => Err(guarantee),
            None => Ok(self.plans),
        }
    }
}

/// A configured planner for build passes.
#[derive(Clone, Debug, Default)]
pub struct Session {
    options: ProcessorOptions,
}

impl Session {
    pub fn new(options: ProcessorOptions) -> Self {
        Session { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Plan every holder in `holders`.
    ///
    /// Repeated holders are planned once. A failing holder never keeps
    /// the others from producing plans.
    #[tracing::instrument(level = "debug", skip_all, fields(holders = holders.len()))]
    pub fn process<Q>(&self, query: &Q, holders: &[DeclName]) -> BatchOutcome
    where
        Q: HierarchyQuery + Sync + ?Sized,
    {
        if self.options.disabled {
            tracing::debug!("processing disabled");
            return BatchOutcome::default();
        }

        let mut seen = FxHashSet::default();
        let holders: Vec<&DeclName> = holders.iter().filter(|h| seen.insert(*h)).collect();

        let log = FailureLog::new();
        let mut plans = if self.options.parallel && holders.len() > 1 {
            process_parallel(query, &holders, &log)
        } else {
            process_sequential(query, &holders, &log)
        };
        plans.sort_by(|a, b| a.root().cmp(b.root()));

        let failures = log.into_sorted();
        tracing::debug!(plans = plans.len(), failures = failures.len(), "pass complete");
        BatchOutcome { plans, failures }
    }
}

fn plan_one<Q>(query: &Q, holder: &DeclName, log: &FailureLog) -> Option<GenerationPlan>
where
    Q: HierarchyQuery + ?Sized,
{
    match sealum_plan::plan(query, holder) {
        Ok(plan) => Some(plan),
        Err(failures) => {
            log.extend(failures);
            None
        }
    }
}

fn process_sequential<Q>(query: &Q, holders: &[&DeclName], log: &FailureLog) -> Vec<GenerationPlan>
where
    Q: HierarchyQuery + ?Sized,
{
    holders
        .iter()
        .filter_map(|holder| plan_one(query, holder, log))
        .collect()
}

fn process_parallel<Q>(query: &Q, holders: &[&DeclName], log: &FailureLog) -> Vec<GenerationPlan>
where
    Q: HierarchyQuery + Sync + ?Sized,
{
    rayon::ThreadPoolBuilder::new()
        .stack_size(WORKER_STACK_SIZE)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                holders
                    .par_iter()
                    .filter_map(|holder| plan_one(query, holder, log))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            process_sequential(query, holders, log)
        })
}
