use std::collections::HashMap;

use tracing::debug;

use super::ticket::extract_ticket_key;
use crate::github::Commit;

/// Committer key used for commits with no associated account.
///
/// Some authorship records are anonymous or unassociated with a GitHub
/// account; grouping them under one sentinel keeps classification total
/// instead of failing the run. Pinned by test below.
pub const UNKNOWN_COMMITTER: &str = "unknown - (no account)";

/// Composite identity key: `"login - Display Name"`.
///
/// Case-sensitive and display-name-sensitive by design: the same person with
/// a changed display name counts as two contributors. Known limitation,
/// preserved from the original behavior.
pub fn committer_key(commit: &Commit) -> String {
    match &commit.author {
        Some(author) => format!("{} - {}", author.login, author.name),
        None => UNKNOWN_COMMITTER.to_string(),
    }
}

/// The two independent groupings over one commit set.
///
/// Values keep fetch order and duplicates; every commit lands in exactly one
/// ticket group and one committer group, so both maps are commit-preserving.
#[derive(Debug, Default)]
pub struct CommitGroups<'a> {
    /// Ticket key (or `Unknown`) to the commits referencing it
    pub tickets: HashMap<String, Vec<&'a Commit>>,
    /// Committer key to that contributor's commits
    pub committers: HashMap<String, Vec<&'a Commit>>,
}

/// Group a commit list by ticket key and by committer key in one pass.
pub fn build_groupings(commits: &[Commit]) -> CommitGroups<'_> {
    let mut groups = CommitGroups::default();
    for commit in commits {
        groups
            .tickets
            .entry(extract_ticket_key(&commit.message))
            .or_default()
            .push(commit);
        groups
            .committers
            .entry(committer_key(commit))
            .or_default()
            .push(commit);
    }
    debug!(
        commits = commits.len(),
        tickets = groups.tickets.len(),
        committers = groups.committers.len(),
        "built groupings"
    );
    groups
}
