use crate::github::Commit;

/// Include/exclude path-prefix rule scoping which commits belong to a
/// logical sub-project. Empty strings disable the corresponding side.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include: String,
    exclude: String,
}

impl PathFilter {
    pub fn new(include: &str, exclude: &str) -> Self {
        PathFilter {
            include: include.to_string(),
            exclude: exclude.to_string(),
        }
    }

    /// Whether a commit belongs to the filtered sub-project.
    ///
    /// Included: no include prefix configured, or at least one changed file
    /// is under it. Excluded: an exclude prefix is configured and *every*
    /// changed file is under it. A commit with no changed files is excluded
    /// whenever an exclude prefix is set (`all` over an empty list is
    /// vacuously true); that quirk is load-bearing and pinned by test.
    pub fn matches(&self, commit: &Commit) -> bool {
        let included = self.include.is_empty()
            || commit.files.iter().any(|f| f.starts_with(&self.include));
        let excluded = !self.exclude.is_empty()
            && commit.files.iter().all(|f| f.starts_with(&self.exclude));
        included && !excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PathFilter::new("", "");
        assert!(filter.matches(&Commit::new("m", None, &["lib/x.py"])));
        assert!(filter.matches(&Commit::new("m", None, &[])));
    }

    #[test]
    fn test_include_prefix() {
        let filter = PathFilter::new("app/", "");
        assert!(filter.matches(&Commit::new("m", None, &["app/y.py"])));
        assert!(filter.matches(&Commit::new("m", None, &["lib/x.py", "app/y.py"])));
        assert!(!filter.matches(&Commit::new("m", None, &["lib/x.py"])));
    }

    #[test]
    fn test_fully_excluded_commit() {
        let filter = PathFilter::new("", "lib/");
        assert!(!filter.matches(&Commit::new("m", None, &["lib/x.py"])));
    }

    #[test]
    fn test_partially_excluded_commit_still_matches() {
        let filter = PathFilter::new("", "lib/");
        assert!(filter.matches(&Commit::new("m", None, &["lib/x.py", "app/y.py"])));
    }

    #[test]
    fn test_fileless_commit_vacuously_excluded() {
        // No files + configured exclude prefix: `all` over the empty list is
        // true, so the commit is excluded even though nothing is under lib/.
        let filter = PathFilter::new("", "lib/");
        assert!(!filter.matches(&Commit::new("m", None, &[])));
    }

    #[test]
    fn test_include_and_exclude_combined() {
        let filter = PathFilter::new("app/", "app/vendor/");
        assert!(filter.matches(&Commit::new("m", None, &["app/y.py", "app/vendor/z.py"])));
        assert!(!filter.matches(&Commit::new("m", None, &["app/vendor/z.py"])));
        assert!(!filter.matches(&Commit::new("m", None, &["lib/x.py"])));
    }
}
