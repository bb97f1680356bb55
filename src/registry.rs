use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use thiserror::Error;

use crate::data_loader::{MatchRecord, TeamIdentity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    // Some sources write the weight as a string, some as a number
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub league: Option<String>,
}

impl TeamEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo_url: None,
            weight: None,
            league: None,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate team id: {0}")]
    DuplicateId(String),

    #[error("Duplicate team name: {0}")]
    DuplicateName(String),
}

/// Index of a team inside the [`TeamRegistry`] it was resolved against.
/// Handles from different registries must not be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamHandle(usize);

impl TeamHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Read-only catalogue of known teams. Built once, then passed by reference to every aggregation.
///
/// Entries are kept in display-name order, so iterating the registry gives the alphabetical list.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<TeamEntry>,
    by_id: HashMap<String, TeamHandle>,
    by_name: HashMap<String, TeamHandle>,
}

impl TeamRegistry {
    pub fn new(mut teams: Vec<TeamEntry>) -> Result<Self, RegistryError> {
        teams.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_id = HashMap::with_capacity(teams.len());
        let mut by_name = HashMap::with_capacity(teams.len());

        for (idx, team) in teams.iter().enumerate() {
            if by_id.insert(team.id.clone(), TeamHandle(idx)).is_some() {
                return Err(RegistryError::DuplicateId(team.id.clone()));
            }
            if by_name.insert(team.name.clone(), TeamHandle(idx)).is_some() {
                return Err(RegistryError::DuplicateName(team.name.clone()));
            }
        }

        Ok(Self { teams, by_id, by_name })
    }

    pub fn resolve_by_id(&self, id: &str) -> Option<&TeamEntry> {
        self.handle_by_id(id).map(|h| self.entry(h))
    }

    pub fn resolve_by_name(&self, name: &str) -> Option<&TeamEntry> {
        self.by_name.get(name).map(|&h| self.entry(h))
    }

    pub fn handle_by_id(&self, id: &str) -> Option<TeamHandle> {
        self.by_id.get(id).copied()
    }

    // Id first. If the id is missing or unknown we fall back to the display name, since older
    // sources only ever carried the name.
    pub fn resolve(&self, identity: &TeamIdentity) -> Option<TeamHandle> {
        identity
            .team_id
            .as_deref()
            .and_then(|id| self.by_id.get(id))
            .or_else(|| self.by_name.get(&identity.name))
            .copied()
    }

    // Both sides of a usable match. A match against yourself is as unusable as an unknown team.
    pub fn resolve_sides(&self, m: &MatchRecord) -> Option<(TeamHandle, TeamHandle)> {
        let home = self.resolve(&m.home)?;
        let away = self.resolve(&m.away)?;

        if home == away { return None; }

        Some((home, away))
    }

    pub fn entry(&self, handle: TeamHandle) -> &TeamEntry {
        &self.teams[handle.0]
    }

    pub fn teams(&self) -> impl Iterator<Item = &TeamEntry> {
        self.teams.iter()
    }

    pub fn handles(&self) -> impl Iterator<Item = TeamHandle> {
        (0..self.teams.len()).map(TeamHandle)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
