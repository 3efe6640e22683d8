use std::collections::{BTreeSet, HashMap};

use super::classify::CommitGroups;
use crate::github::Commit;

/// The three report sets derived from the production and test groupings.
///
/// A `BTreeSet` keeps the report order stable; the audit itself puts no
/// ordering requirement on the sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Tickets touched in production with no test commit referencing them
    pub uncovered_tickets: BTreeSet<String>,
    /// Contributors with production commits but no test commits
    pub non_testers: BTreeSet<String>,
    /// Contributors with test commits but no production commits
    pub pure_testers: BTreeSet<String>,
}

/// Compute the three differential sets. Pure function over the groupings:
/// no fetching, no hidden state, applying it twice gives the same answer.
pub fn reconcile(prod: &CommitGroups<'_>, test: &CommitGroups<'_>) -> Reconciliation {
    Reconciliation {
        uncovered_tickets: key_difference(&prod.tickets, &test.tickets),
        non_testers: key_difference(&prod.committers, &test.committers),
        pure_testers: key_difference(&test.committers, &prod.committers),
    }
}

fn key_difference(
    left: &HashMap<String, Vec<&Commit>>,
    right: &HashMap<String, Vec<&Commit>>,
) -> BTreeSet<String> {
    left.keys()
        .filter(|key| !right.contains_key(*key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::classify::build_groupings;

    fn keys(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_differential_sets() {
        let prod_commits = vec![
            Commit::new("ABC-1 fix", Some(("alice", "Alice A")), &[]),
            Commit::new("DEF-2 feature", Some(("bob", "Bob B")), &[]),
        ];
        let test_commits = vec![
            Commit::new("ABC-1 add test", Some(("alice", "Alice A")), &[]),
            Commit::new("GHI-3 add test", Some(("carol", "Carol C")), &[]),
        ];
        let prod = build_groupings(&prod_commits);
        let test = build_groupings(&test_commits);

        let recon = reconcile(&prod, &test);
        assert_eq!(keys(&recon.uncovered_tickets), vec!["DEF-2"]);
        assert_eq!(keys(&recon.non_testers), vec!["bob - Bob B"]);
        assert_eq!(keys(&recon.pure_testers), vec!["carol - Carol C"]);
    }

    #[test]
    fn test_unknown_ticket_absorbed_by_unmatched_test_commit() {
        // Both sides have a commit with no ticket reference: the Unknown key
        // exists in both ticket maps, so it is not reported as uncovered.
        let prod_commits = vec![Commit::new("tidy", Some(("alice", "Alice A")), &[])];
        let test_commits = vec![Commit::new("tidy tests", Some(("alice", "Alice A")), &[])];
        let recon = reconcile(
            &build_groupings(&prod_commits),
            &build_groupings(&test_commits),
        );
        assert!(recon.uncovered_tickets.is_empty());
    }

    #[test]
    fn test_unknown_ticket_reported_when_only_in_prod() {
        let prod_commits = vec![Commit::new("tidy", Some(("alice", "Alice A")), &[])];
        let recon = reconcile(&build_groupings(&prod_commits), &build_groupings(&[]));
        assert_eq!(keys(&recon.uncovered_tickets), vec!["Unknown"]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let prod_commits = vec![
            Commit::new("ABC-1 fix", Some(("alice", "Alice A")), &[]),
            Commit::new("chore", None, &[]),
        ];
        let test_commits = vec![Commit::new("DEF-2 test", Some(("bob", "Bob B")), &[])];
        let prod = build_groupings(&prod_commits);
        let test = build_groupings(&test_commits);

        let first = reconcile(&prod, &test);
        let second = reconcile(&prod, &test);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let recon = reconcile(&build_groupings(&[]), &build_groupings(&[]));
        assert!(recon.uncovered_tickets.is_empty());
        assert!(recon.non_testers.is_empty());
        assert!(recon.pure_testers.is_empty());
    }
}
