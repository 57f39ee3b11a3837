//! Hierarchical scan of a registry.
//!
//! The engine walks projects, then repositories, then artifacts. The filter
//! is applied before descending into a node, so excluded branches cost no
//! request. A failed listing is logged and recorded as an empty placeholder;
//! it never stops sibling branches.

use futures::stream::{self, StreamExt};
use harbor_ls_registry::{Artifact, ErrorKind, RegistryApi, RegistryError};
use tracing::{debug, error, info, warn};

use crate::filter::PathFilter;
use crate::result::{ProjectArtifacts, ScanResult, ScanSummary};

/// Configuration for the scan engine.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of branches listed concurrently at each level.
    ///
    /// `1` scans strictly sequentially, depth first.
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

impl ScanConfig {
    /// Sets the concurrency limit. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// A child value together with the counters collected while producing it.
struct Branch<T> {
    value: T,
    summary: ScanSummary,
}

/// Walks a registry through a [`RegistryApi`].
#[derive(Debug)]
pub struct ScanEngine<A> {
    api: A,
    filter: PathFilter,
    config: ScanConfig,
}

impl<A: RegistryApi> ScanEngine<A> {
    /// Creates a scan engine.
    pub fn new(api: A, filter: PathFilter, config: ScanConfig) -> Self {
        Self {
            api,
            filter,
            config,
        }
    }

    /// Returns the registry API the engine scans through.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Returns the active filter.
    pub const fn filter(&self) -> &PathFilter {
        &self.filter
    }

    /// Scans the whole registry.
    ///
    /// Never fails: if the project list cannot be read, the result is empty.
    pub async fn scan(&self) -> ScanResult {
        self.scan_with_summary().await.0
    }

    /// Scans the whole registry and returns the collected counters as well.
    pub async fn scan_with_summary(&self) -> (ScanResult, ScanSummary) {
        let registry = self.api.registry();
        info!(registry, "Scanning registry");

        let projects = match self.api.list_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                match e.kind() {
                    ErrorKind::Auth => error!(registry, error = %e, "Not authorized to browse projects"),
                    ErrorKind::Transport => error!(registry, error = %e, "Could not list projects"),
                }
                return (ScanResult::new(), ScanSummary::default());
            }
        };
        debug!(registry, "Found projects: {}", projects.join(" "));

        let branches: Vec<(String, Branch<ProjectArtifacts>)> = stream::iter(
            projects
                .into_iter()
                .filter(|project| self.filter.matches(&[project.as_str()])),
        )
        .map(|project| async move {
            let branch = self.project_branch(&project).await;
            (project, branch)
        })
        .buffered(self.config.concurrency.max(1))
        .collect()
        .await;

        let mut summary = ScanSummary::default();
        let result = branches
            .into_iter()
            .map(|(project, branch)| {
                summary += branch.summary;
                (project, branch.value)
            })
            .collect::<ScanResult>();

        info!(
            registry,
            projects = summary.projects,
            failed_projects = summary.failed_projects,
            repositories = summary.repositories,
            failed_repositories = summary.failed_repositories,
            artifacts = summary.artifacts,
            "Scan complete"
        );

        (result, summary)
    }

    /// Scans the repositories of one project.
    ///
    /// The project itself is not tested against the filter; its repositories
    /// are. A failed repository listing yields an empty mapping.
    pub async fn scan_project(&self, project: &str) -> ProjectArtifacts {
        self.project_branch(project).await.value
    }

    /// Lists the artifacts of one repository.
    ///
    /// A failed listing yields an empty list.
    pub async fn scan_repository(&self, project: &str, repo: &str) -> Vec<Artifact> {
        self.repository_branch(project, repo).await.value
    }

    async fn project_branch(&self, project: &str) -> Branch<ProjectArtifacts> {
        info!(registry = self.api.registry(), project, "Scanning project");

        let mut summary = ScanSummary {
            projects: 1,
            ..ScanSummary::default()
        };

        let repos = match self.api.list_repositories(project).await {
            Ok(repos) => repos,
            Err(e) => {
                log_branch_failure(&e, project);
                summary.failed_projects = 1;
                return Branch {
                    value: ProjectArtifacts::new(),
                    summary,
                };
            }
        };
        debug!(project, "Found repos: {}", repos.join(" "));

        let branches: Vec<(String, Branch<Vec<Artifact>>)> = stream::iter(
            repos
                .into_iter()
                .filter(|repo| self.filter.matches(&[project, repo.as_str()])),
        )
        .map(|repo| async move {
            let branch = self.repository_branch(project, &repo).await;
            (repo, branch)
        })
        .buffered(self.config.concurrency.max(1))
        .collect()
        .await;

        let value: ProjectArtifacts = branches
            .into_iter()
            .map(|(repo, branch)| {
                summary += branch.summary;
                (repo, branch.value)
            })
            .collect();

        Branch { value, summary }
    }

    async fn repository_branch(&self, project: &str, repo: &str) -> Branch<Vec<Artifact>> {
        info!(registry = self.api.registry(), project, repo, "Scanning repository");

        match self.api.list_artifacts(project, repo).await {
            Ok(artifacts) => Branch {
                summary: ScanSummary {
                    repositories: 1,
                    artifacts: artifacts.len(),
                    ..ScanSummary::default()
                },
                value: artifacts,
            },
            Err(e) => {
                log_branch_failure(&e, &format!("{project}/{repo}"));
                Branch {
                    value: Vec::new(),
                    summary: ScanSummary {
                        repositories: 1,
                        failed_repositories: 1,
                        ..ScanSummary::default()
                    },
                }
            }
        }
    }
}

fn log_branch_failure(e: &RegistryError, path: &str) {
    match e.kind() {
        ErrorKind::Auth => warn!(path, error = %e, "Not authorized, skipping"),
        ErrorKind::Transport => warn!(path, error = %e, "Could not scan, skipping"),
    }
}
