//! Harbor API record types.
//!
//! The `*Record` types mirror the JSON bodies returned by the v2.0 API and
//! only carry the fields harbor-ls reads; everything else is ignored.
//! [`Artifact`] is the decoded form handed to callers.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of `GET /projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project name.
    pub name: String,
}

/// Entry of `GET /projects/{project}/repositories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Namespaced repository name, `project/repo`.
    pub name: String,
}

impl RepositoryRecord {
    /// Returns the repository name with the leading `project/` removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbor_ls_registry::RepositoryRecord;
    ///
    /// let record = RepositoryRecord { name: "library/nginx".to_string() };
    /// assert_eq!(record.bare_name(), "nginx");
    ///
    /// let nested = RepositoryRecord { name: "library/tools/curl".to_string() };
    /// assert_eq!(nested.bare_name(), "tools/curl");
    /// ```
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.name
            .split_once('/')
            .map_or(self.name.as_str(), |(_, repo)| repo)
    }
}

/// Entry of the `tags` array of an artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag name.
    pub name: String,
}

/// Entry of `GET /projects/{project}/repositories/{repo}/artifacts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Time the artifact was pushed.
    pub push_time: PushTime,
    /// Content digest.
    pub digest: String,
    /// Tags; Harbor sends `null` for untagged artifacts.
    #[serde(default)]
    pub tags: Option<Vec<TagRecord>>,
}

/// An artifact as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Push time, the ordering key.
    pub time: PushTime,
    /// Content digest, the identity of the artifact.
    pub digest: String,
    /// Tag names in registry order. Empty for untagged artifacts.
    pub tags: Vec<String>,
}

impl Artifact {
    /// Creates an artifact.
    #[must_use]
    pub fn new(time: PushTime, digest: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            time,
            digest: digest.into(),
            tags,
        }
    }

    /// Returns the tag names sorted alphabetically.
    #[must_use]
    pub fn sorted_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl From<ArtifactRecord> for Artifact {
    fn from(record: ArtifactRecord) -> Self {
        Self {
            time: record.push_time,
            digest: record.digest,
            tags: record
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.name)
                .collect(),
        }
    }
}

/// Push time of an artifact, kept in the form the registry sent it.
///
/// Harbor reports RFC 3339 strings; integer epoch seconds are accepted too.
/// Values are ordered by the instant they denote. Strings that are not valid
/// RFC 3339 sort after every parseable value, lexicographically among
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PushTime {
    /// Seconds since the Unix epoch.
    Epoch(i64),
    /// Timestamp string, normally RFC 3339.
    Timestamp(String),
}

impl PushTime {
    /// Returns the instant this push time denotes, if it can be determined.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Epoch(secs) => Some(DateTime::from_timestamp(*secs, 0).unwrap_or(if *secs < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })),
            Self::Timestamp(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.with_timezone(&Utc)),
        }
    }

    fn cmp_raw(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Epoch(a), Self::Epoch(b)) => a.cmp(b),
            (Self::Epoch(_), Self::Timestamp(_)) => Ordering::Less,
            (Self::Timestamp(_), Self::Epoch(_)) => Ordering::Greater,
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
        }
    }
}

impl Ord for PushTime {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Self::Epoch(a), Self::Epoch(b)) = (self, other) {
            return a.cmp(b);
        }
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.cmp_raw(other)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.cmp_raw(other),
        }
    }
}

impl PartialOrd for PushTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PushTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epoch(secs) => write!(f, "{secs}"),
            Self::Timestamp(raw) => f.write_str(raw),
        }
    }
}

impl From<i64> for PushTime {
    fn from(secs: i64) -> Self {
        Self::Epoch(secs)
    }
}

impl From<&str> for PushTime {
    fn from(raw: &str) -> Self {
        Self::Timestamp(raw.to_string())
    }
}
