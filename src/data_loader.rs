use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::ranking_context::RankingContext;
use crate::registry::{RegistryError, TeamEntry, TeamRegistry};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid team registry: {0}")]
    Registry(#[from] RegistryError),
}

/// One side of a match as the source wrote it. `team_id` is only present once the
/// source (or the loader) has matched the name against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamIdentity {
    pub name: String,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl TeamIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), team_id: None }
    }

    pub fn with_id(name: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self { name: name.into(), team_id: Some(team_id.into()) }
    }
}

/// A finished match. Half-time scores are a snapshot of the same match, so they never exceed
/// the full-time scores in valid data. The engine trusts this and does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: u64,
    pub season: u32,
    pub matchday: u32,
    pub home: TeamIdentity,
    pub away: TeamIdentity,
    pub home_half_time_score: u16,
    pub away_half_time_score: u16,
    pub home_full_time_score: u16,
    pub away_full_time_score: u16,
}

pub fn parse_registry<R: Read>(reader: R) -> Result<TeamRegistry, LoadError> {
    let teams: Vec<TeamEntry> = serde_json::from_reader(reader)?;
    Ok(TeamRegistry::new(teams)?)
}

pub fn load_registry(file_path: impl AsRef<Path>) -> Result<TeamRegistry, LoadError> {
    parse_registry(File::open(file_path)?)
}

// Season rows look like: date, home, away, ht home, ht away, ft home, ft away
// Ids and matchdays are derived from the row index, header row included, so they stay stable
// as long as the file doesn't change. Fields are decoded per row, so a row that isn't valid
// UTF-8 is skipped like any other malformed row.
pub fn parse_season_csv<R: Read>(
    reader: R,
    season: u32,
    registry: &TeamRegistry,
    ranking_context: &RankingContext,
) -> Result<Vec<MatchRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let per_matchday = ranking_context.matches_per_matchday.max(1);
    let mut matches = Vec::new();
    let mut unresolved = 0;

    // Whitespace-only lines don't take a row index
    let rows = csv_reader.byte_records().filter(|row| !row.as_ref().is_ok_and(is_blank));

    for (idx, row) in rows.enumerate() {
        let row = row?;

        if idx == 0 && is_header(&row) { continue; }

        let Some(parsed) = parse_row(&row) else {
            warn!(season, row = idx, "Skipping malformed season row");
            continue;
        };

        // Only keep rows where we recognise both teams
        let home = registry.resolve_by_name(&parsed.home).map(|t| t.id.clone());
        let away = registry.resolve_by_name(&parsed.away).map(|t| t.id.clone());
        let (Some(home_id), Some(away_id)) = (home, away) else {
            unresolved += 1;
            continue;
        };

        matches.push(MatchRecord {
            id: row_id(season, idx),
            season,
            matchday: (idx / per_matchday + 1) as u32,
            home: TeamIdentity::with_id(parsed.home, home_id),
            away: TeamIdentity::with_id(parsed.away, away_id),
            home_half_time_score: parsed.scores[0],
            away_half_time_score: parsed.scores[1],
            home_full_time_score: parsed.scores[2],
            away_full_time_score: parsed.scores[3],
        });
    }

    debug!(season, loaded = matches.len(), unresolved, "Parsed season");

    Ok(matches)
}

pub fn load_season(
    file_path: impl AsRef<Path>,
    registry: &TeamRegistry,
    ranking_context: &RankingContext,
) -> Result<Vec<MatchRecord>, LoadError> {
    let file_path = file_path.as_ref();
    let season = season_from_path(file_path);

    parse_season_csv(File::open(file_path)?, season, registry, ranking_context)
}

// Seasons are appended in the order given, which is the order the table folds them in.
pub fn load_seasons<P: AsRef<Path>>(
    file_paths: &[P],
    registry: &TeamRegistry,
    ranking_context: &RankingContext,
) -> Result<Vec<MatchRecord>, LoadError> {
    let mut matches = Vec::new();
    for path in file_paths {
        matches.extend(load_season(path, registry, ranking_context)?);
    }
    Ok(matches)
}

// Season files are named after the season, e.g. 20320.csv. Anything else is season 0.
pub fn season_from_path(file_path: &Path) -> u32 {
    file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

struct ParsedRow {
    home: String,
    away: String,
    scores: [u16; 4],
}

fn parse_row(row: &csv::ByteRecord) -> Option<ParsedRow> {
    if row.len() < 7 { return None; }

    let mut scores = [0u16; 4];
    for (slot, idx) in scores.iter_mut().zip(3..7) {
        *slot = field(row, idx)?.parse().ok()?;
    }

    Some(ParsedRow {
        home: field(row, 1)?.to_string(),
        away: field(row, 2)?.to_string(),
        scores,
    })
}

fn field(row: &csv::ByteRecord, idx: usize) -> Option<&str> {
    std::str::from_utf8(row.get(idx)?).ok().map(clean)
}

fn is_header(row: &csv::ByteRecord) -> bool {
    row.iter()
        .map(String::from_utf8_lossy)
        .any(|f| f.contains("date") || f.contains("SEASON"))
}

// After trimming, a line of spaces reads as a single empty field
fn is_blank(row: &csv::ByteRecord) -> bool {
    row.len() <= 1 && row.iter().all(|f| f.is_empty())
}

// Stray quotes survive when a source quotes only part of a field
fn clean(field: &str) -> &str {
    field.trim_matches('"').trim()
}

// "<season><row>" read as a number, e.g. season 20320 row 12 => 2032012
fn row_id(season: u32, idx: usize) -> u64 {
    let mut shift = 10u64;
    while shift <= idx as u64 {
        shift *= 10;
    }
    season as u64 * shift + idx as u64
}
