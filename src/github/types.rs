/// One commit fetched from the GitHub API.
///
/// Built once by the fetcher and never mutated afterwards; the audit core
/// works over `&[Commit]` and holds references only.
#[derive(Debug, Clone)]
pub struct Commit {
    /// Full free-text commit message (ticket keys are extracted from this)
    pub message: String,
    /// Author identity, when the commit is associated with a GitHub account
    pub author: Option<CommitAuthor>,
    /// Paths of the files changed by this commit
    pub files: Vec<String>,
}

/// Author identity for a commit.
///
/// Some commits carry no account association (e.g. an unrecognized author
/// email), so `Commit::author` is optional.
#[derive(Debug, Clone)]
pub struct CommitAuthor {
    /// Stable GitHub login handle
    pub login: String,
    /// Display name from the commit metadata
    pub name: String,
}

impl Commit {
    /// Convenience constructor for in-memory commits (tests, stubs).
    #[cfg(test)]
    pub fn new(message: &str, author: Option<(&str, &str)>, files: &[&str]) -> Self {
        Commit {
            message: message.to_string(),
            author: author.map(|(login, name)| CommitAuthor {
                login: login.to_string(),
                name: name.to_string(),
            }),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }
}
