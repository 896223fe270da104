//! Site data models and the JSON loader
//!
//! Each data set lives in its own file under the data directory
//! (`events.json`, `projects.json`, `team.json`, `contact.json`). Files are
//! loaded independently so one bad file only blanks its own section.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Placeholder shown for events without a description
pub const DEFAULT_EVENT_DESCRIPTION: &str =
    "Join us for this exciting event! More details will be announced soon.";

/// The data files a site is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataKind {
    Events,
    Projects,
    Team,
    Contact,
}

impl DataKind {
    pub const ALL: [DataKind; 4] = [
        DataKind::Events,
        DataKind::Projects,
        DataKind::Team,
        DataKind::Contact,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            DataKind::Events => "events.json",
            DataKind::Projects => "projects.json",
            DataKind::Team => "team.json",
            DataKind::Contact => "contact.json",
        }
    }

    /// Human readable name used in visitor-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            DataKind::Events => "events",
            DataKind::Projects => "projects",
            DataKind::Team => "team information",
            DataKind::Contact => "contact information",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataKind::Events => "events",
            DataKind::Projects => "projects",
            DataKind::Team => "team",
            DataKind::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// Record identifier; data files use both numbers and strings
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{n}"),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntryId,
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Event {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => DEFAULT_EVENT_DESCRIPTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    #[serde(default)]
    pub executive: Vec<ExecutiveMember>,
    #[serde(default)]
    pub technical: Vec<DomainLead>,
}

impl TeamData {
    pub fn member_count(&self) -> usize {
        self.executive.len() + self.technical.len()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveMember {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainLead {
    pub domain: String,
    pub lead: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Everything a site build needs, each part loaded independently
#[derive(Debug)]
pub struct SiteData {
    pub events: Result<Vec<Event>>,
    pub projects: Result<Vec<Project>>,
    pub team: Result<TeamData>,
    pub contact: Result<ContactInfo>,
}

impl SiteData {
    /// Site data with every set present but empty
    pub fn empty() -> Self {
        Self {
            events: Ok(Vec::new()),
            projects: Ok(Vec::new()),
            team: Ok(TeamData::default()),
            contact: Ok(ContactInfo::default()),
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ContentError> {
        [
            self.events.as_ref().err(),
            self.projects.as_ref().err(),
            self.team.as_ref().err(),
            self.contact.as_ref().err(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn event_count(&self) -> usize {
        self.events.as_ref().map_or(0, Vec::len)
    }

    pub fn project_count(&self) -> usize {
        self.projects.as_ref().map_or(0, Vec::len)
    }
}

/// Loads site data from a directory of JSON files
#[derive(Clone, Debug)]
pub struct DataSource {
    root: PathBuf,
}

impl DataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: DataKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    pub async fn events(&self) -> Result<Vec<Event>> {
        self.load(DataKind::Events).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.load(DataKind::Projects).await
    }

    pub async fn team(&self) -> Result<TeamData> {
        self.load(DataKind::Team).await
    }

    pub async fn contact(&self) -> Result<ContactInfo> {
        self.load(DataKind::Contact).await
    }

    /// Load all data sets concurrently
    pub async fn load_all(&self) -> SiteData {
        let (events, projects, team, contact) =
            tokio::join!(self.events(), self.projects(), self.team(), self.contact());

        let data = SiteData {
            events,
            projects,
            team,
            contact,
        };
        for err in data.errors() {
            tracing::warn!(kind = %err.kind(), "{err}");
        }
        data
    }

    async fn load<T: DeserializeOwned>(&self, kind: DataKind) -> Result<T> {
        let path = self.path_for(kind);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ContentError::Io {
                kind,
                path: path.clone(),
                source,
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse {
            kind,
            path: path.clone(),
            source,
        })?;

        tracing::debug!(%kind, path = %path.display(), "loaded site data");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_optional_fields() {
        let event: Event = serde_json::from_str(
            r#"{ "id": 3, "title": "Rust Night", "date": "2025-03-14" }"#,
        )
        .unwrap();

        assert_eq!(event.id, EntryId::Number(3));
        assert_eq!(event.location, None);
        assert_eq!(event.description_or_default(), DEFAULT_EVENT_DESCRIPTION);
    }

    #[test]
    fn test_blank_description_uses_placeholder() {
        let event: Event = serde_json::from_str(
            r#"{ "id": "hack-1", "title": "Hackathon", "date": "2025-04-01", "description": "  " }"#,
        )
        .unwrap();

        assert_eq!(event.id.to_string(), "hack-1");
        assert_eq!(event.description_or_default(), DEFAULT_EVENT_DESCRIPTION);
    }

    #[test]
    fn test_project_technologies_default_empty() {
        let project: Project = serde_json::from_str(
            r#"{ "id": 1, "title": "Club Portal", "description": "The club site" }"#,
        )
        .unwrap();

        assert!(project.technologies.is_empty());
        assert_eq!(project.github, None);
    }

    #[test]
    fn test_team_sections_default_empty() {
        let team: TeamData = serde_json::from_str(
            r#"{ "executive": [{ "name": "A. Rao", "role": "President" }] }"#,
        )
        .unwrap();

        assert_eq!(team.executive.len(), 1);
        assert!(team.technical.is_empty());
        assert_eq!(team.member_count(), 1);
    }

    #[test]
    fn test_empty_site_data_is_complete() {
        let data = SiteData::empty();
        assert!(data.is_complete());
        assert_eq!(data.event_count(), 0);
    }

    #[test]
    fn test_path_for() {
        let source = DataSource::new("public/data");
        assert_eq!(
            source.path_for(DataKind::Contact),
            PathBuf::from("public/data/contact.json")
        );
    }
}
