pub mod classify;
pub mod filter;
pub mod reconcile;
pub mod ticket;

pub use classify::{build_groupings, CommitGroups};
pub use filter::PathFilter;
pub use reconcile::{reconcile, Reconciliation};

use tracing::debug;

use crate::github::Commit;

/// Result of one audit run: the two groupings plus the reconciled sets.
///
/// Borrows the commit lists; the report resolves each reconciled key back to
/// its commits through the groupings.
#[derive(Debug)]
pub struct Audit<'a> {
    pub prod: CommitGroups<'a>,
    pub test: CommitGroups<'a>,
    pub reconciliation: Reconciliation,
}

/// Group both commit sets and reconcile them.
pub fn run<'a>(prod_commits: &'a [Commit], test_commits: &'a [Commit]) -> Audit<'a> {
    let prod = build_groupings(prod_commits);
    let test = build_groupings(test_commits);
    let reconciliation = reconcile(&prod, &test);
    debug!(
        uncovered_tickets = reconciliation.uncovered_tickets.len(),
        non_testers = reconciliation.non_testers.len(),
        pure_testers = reconciliation.pure_testers.len(),
        "audit complete"
    );
    Audit {
        prod,
        test,
        reconciliation,
    }
}
