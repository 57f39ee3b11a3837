//! Path-prefix filters over the registry hierarchy.

/// A set of path-prefix constraints pruning the traversal.
///
/// Each entry is a sequence of path segments (`project`, `project/repo`).
/// A hierarchy path is the sequence of names from the registry root to a
/// node: `[project]` for a project, `[project, repo]` for a repository.
///
/// An empty filter matches every path. Otherwise a path matches when at
/// least one entry is a prefix of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    entries: Vec<Vec<String>>,
}

impl PathFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses filter strings of the form `project` or `project/repo`.
    ///
    /// Strings are split on `/` verbatim: `p1/` becomes `["p1", ""]` and the
    /// empty string becomes `[""]`, neither of which matches any project.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbor_ls_scanner::PathFilter;
    ///
    /// let filter = PathFilter::parse(["library", "team/api"]);
    /// assert!(filter.matches(&["library"]));
    /// assert!(filter.matches(&["team", "api"]));
    /// assert!(!filter.matches(&["team", "web"]));
    /// ```
    pub fn parse<I, S>(filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = filters
            .into_iter()
            .map(|filter| {
                filter
                    .as_ref()
                    .split('/')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { entries }
    }

    /// Creates a filter from already split entries.
    #[must_use]
    pub const fn from_entries(entries: Vec<Vec<String>>) -> Self {
        Self { entries }
    }

    /// Returns the filter entries.
    #[must_use]
    pub fn entries(&self) -> &[Vec<String>] {
        &self.entries
    }

    /// Returns `true` if the filter has no entries and so matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tests a hierarchy path against the filter.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.entries.is_empty() || self.entries.iter().any(|entry| is_prefix_of(entry, path))
    }
}

/// Returns `true` if `entry` agrees with `path` at every index of `entry`.
///
/// An entry longer than the path is never a prefix of it.
#[must_use]
pub fn is_prefix_of<F, S>(entry: &[F], path: &[S]) -> bool
where
    F: AsRef<str>,
    S: AsRef<str>,
{
    entry.len() <= path.len()
        && entry
            .iter()
            .zip(path)
            .all(|(want, got)| want.as_ref() == got.as_ref())
}
