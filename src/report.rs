use colored::Colorize;

use crate::audit::classify::committer_key;
use crate::audit::ticket::extract_ticket_key;
use crate::audit::Audit;
use crate::github::Commit;

/// Print the audit report to the terminal, one line per finding.
///
/// Line shapes are human-oriented; nothing downstream parses them.
pub fn print(audit: &Audit<'_>) {
    section("Uncovered tickets", audit.reconciliation.uncovered_tickets.len());
    for ticket in &audit.reconciliation.uncovered_tickets {
        if let Some(commits) = audit.prod.tickets.get(ticket) {
            println!("{}", render_uncovered_ticket(ticket, commits));
        }
    }

    section("Authors without tests", audit.reconciliation.non_testers.len());
    for author in &audit.reconciliation.non_testers {
        if let Some(commits) = audit.prod.committers.get(author) {
            println!("{}", render_non_tester(author, commits));
        }
    }

    section("Test-only authors", audit.reconciliation.pure_testers.len());
    for author in &audit.reconciliation.pure_testers {
        println!("{}", render_pure_tester(author));
    }
    println!();
}

fn section(title: &str, count: usize) {
    println!();
    println!("{} ({})", title.bold(), count);
    println!("{}", "---------------------------------".dimmed());
}

/// One uncovered ticket with the production contributors behind it.
fn render_uncovered_ticket(ticket: &str, commits: &[&Commit]) -> String {
    let authors: Vec<String> = commits.iter().map(|c| committer_key(c)).collect();
    format!(
        "Uncovered ticket: {} contributed by: {}",
        ticket,
        authors.join(", ")
    )
}

/// One non-tester with the tickets they touched in production.
/// Duplicates are kept on purpose: one entry per contributing commit.
fn render_non_tester(author: &str, commits: &[&Commit]) -> String {
    let tickets: Vec<String> = commits
        .iter()
        .map(|c| extract_ticket_key(&c.message))
        .collect();
    format!(
        "Author did not write tests: {}. Tickets: {}",
        author,
        tickets.join(", ")
    )
}

fn render_pure_tester(author: &str) -> String {
    format!("Author only wrote tests: {}", author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit;

    #[test]
    fn test_render_uncovered_ticket() {
        let a = Commit::new("ABC-1 fix", Some(("alice", "Alice A")), &[]);
        let b = Commit::new("ABC-1 more", Some(("bob", "Bob B")), &[]);
        let line = render_uncovered_ticket("ABC-1", &[&a, &b]);
        assert_eq!(
            line,
            "Uncovered ticket: ABC-1 contributed by: alice - Alice A, bob - Bob B"
        );
    }

    #[test]
    fn test_render_non_tester() {
        let a = Commit::new("ABC-1 fix", Some(("alice", "Alice A")), &[]);
        let b = Commit::new("tidy", Some(("alice", "Alice A")), &[]);
        let line = render_non_tester("alice - Alice A", &[&a, &b]);
        assert_eq!(
            line,
            "Author did not write tests: alice - Alice A. Tickets: ABC-1, Unknown"
        );
    }

    #[test]
    fn test_render_non_tester_keeps_duplicate_tickets() {
        let a = Commit::new("ABC-1 fix", Some(("alice", "Alice A")), &[]);
        let b = Commit::new("ABC-1 more", Some(("alice", "Alice A")), &[]);
        let line = render_non_tester("alice - Alice A", &[&a, &b]);
        assert!(line.ends_with("Tickets: ABC-1, ABC-1"));
    }

    #[test]
    fn test_render_pure_tester() {
        assert_eq!(
            render_pure_tester("carol - Carol C"),
            "Author only wrote tests: carol - Carol C"
        );
    }

    #[test]
    fn test_print_does_not_panic() {
        let prod_commits = vec![
            Commit::new("ABC-1 fix", Some(("alice", "Alice A")), &[]),
            Commit::new("chore", None, &[]),
        ];
        let test_commits = vec![Commit::new("DEF-2 test", Some(("bob", "Bob B")), &[])];
        let result = audit::run(&prod_commits, &test_commits);
        print(&result);
    }
}
