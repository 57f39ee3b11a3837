//! Scan results.

use std::ops::AddAssign;

use harbor_ls_registry::Artifact;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Artifacts of each repository of one project, keyed by bare repository name.
pub type ProjectArtifacts = IndexMap<String, Vec<Artifact>>;

/// Nested `project → repository → artifacts` mapping produced by a scan.
///
/// Keys keep the order the registry listed them in. A branch that could not
/// be listed is present with an empty value; a branch excluded by the filter
/// is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    projects: IndexMap<String, ProjectArtifacts>,
}

impl ScanResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the repositories of a project, replacing any previous entry.
    pub fn insert_project(&mut self, project: impl Into<String>, repositories: ProjectArtifacts) {
        self.projects.insert(project.into(), repositories);
    }

    /// Returns the repositories recorded for a project.
    #[must_use]
    pub fn project(&self, project: &str) -> Option<&ProjectArtifacts> {
        self.projects.get(project)
    }

    /// Returns the artifacts recorded for a repository.
    #[must_use]
    pub fn repository(&self, project: &str, repo: &str) -> Option<&[Artifact]> {
        self.projects
            .get(project)
            .and_then(|repos| repos.get(repo))
            .map(Vec::as_slice)
    }

    /// Iterates over projects in registry order.
    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectArtifacts)> {
        self.projects.iter().map(|(name, repos)| (name.as_str(), repos))
    }

    /// Number of recorded projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if no project was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Consumes the result, returning the underlying mapping.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, ProjectArtifacts> {
        self.projects
    }
}

impl FromIterator<(String, ProjectArtifacts)> for ScanResult {
    fn from_iter<T: IntoIterator<Item = (String, ProjectArtifacts)>>(iter: T) -> Self {
        Self {
            projects: iter.into_iter().collect(),
        }
    }
}

/// Counters collected while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Projects visited (passed the filter).
    pub projects: usize,
    /// Projects whose repository listing failed.
    pub failed_projects: usize,
    /// Repositories visited (passed the filter).
    pub repositories: usize,
    /// Repositories whose artifact listing failed.
    pub failed_repositories: usize,
    /// Artifacts recorded.
    pub artifacts: usize,
}

impl ScanSummary {
    /// Returns `true` if any branch failed.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed_projects > 0 || self.failed_repositories > 0
    }
}

impl AddAssign for ScanSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.projects += rhs.projects;
        self.failed_projects += rhs.failed_projects;
        self.repositories += rhs.repositories;
        self.failed_repositories += rhs.failed_repositories;
        self.artifacts += rhs.artifacts;
    }
}
