use std::cmp::Reverse;

use serde::Serialize;

use crate::data_loader::MatchRecord;
use crate::outcome::{Outcome, Perspective};
use crate::ranking::TeamStanding;
use crate::registry::{TeamHandle, TeamRegistry};

// Matches involving the team, ordered by matchday. Equal matchdays keep their input order.
pub fn matches_for_team<'a>(
    registry: &TeamRegistry,
    team_id: &str,
    matches: &'a [MatchRecord],
) -> Vec<&'a MatchRecord> {
    let Some(team) = registry.handle_by_id(team_id) else { return Vec::new(); };

    by_matchday(matches, |home, away| home == team || away == team, registry)
}

// Matches between the two teams in either order, ordered by matchday
pub fn head_to_head<'a>(
    registry: &TeamRegistry,
    team_a_id: &str,
    team_b_id: &str,
    matches: &'a [MatchRecord],
) -> Vec<&'a MatchRecord> {
    let (Some(a), Some(b)) = (registry.handle_by_id(team_a_id), registry.handle_by_id(team_b_id)) else {
        return Vec::new();
    };

    by_matchday(matches, |home, away| (home, away) == (a, b) || (home, away) == (b, a), registry)
}

pub fn matches_in_season(season: u32, matches: &[MatchRecord]) -> Vec<&MatchRecord> {
    matches.iter().filter(|m| m.season == season).collect()
}

/// The `count` latest matches across the whole input, highest matchday first.
/// Equal matchdays keep their input order.
pub fn latest_matches(matches: &[MatchRecord], count: usize) -> Vec<&MatchRecord> {
    let mut out: Vec<&MatchRecord> = matches.iter().collect();
    out.sort_by_key(|m| Reverse(m.matchday));
    out.truncate(count);
    out
}

/// The `count` teams with the highest `key`, e.g. goals scored or comebacks.
/// Ties keep their table order.
pub fn leaders_by<K, F>(standings: &[TeamStanding], count: usize, key: F) -> Vec<&TeamStanding>
where
    K: Ord,
    F: Fn(&TeamStanding) -> K,
{
    let mut out: Vec<&TeamStanding> = standings.iter().collect();
    out.sort_by_key(|t| Reverse(key(t)));
    out.truncate(count);
    out
}

fn by_matchday<'a, F>(matches: &'a [MatchRecord], keep: F, registry: &TeamRegistry) -> Vec<&'a MatchRecord>
where
    F: Fn(TeamHandle, TeamHandle) -> bool,
{
    let mut out: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| registry.resolve_sides(m).is_some_and(|(home, away)| keep(home, away)))
        .collect();

    out.sort_by_key(|m| m.matchday);
    out
}

/// Full-time record between two teams, counted from team A's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadRecord {
    pub team_a_wins: u32,
    pub team_b_wins: u32,
    pub draws: u32,
}

pub fn head_to_head_record(
    registry: &TeamRegistry,
    team_a_id: &str,
    team_b_id: &str,
    matches: &[MatchRecord],
) -> HeadToHeadRecord {
    let mut record = HeadToHeadRecord::default();

    let Some(a) = registry.handle_by_id(team_a_id) else { return record; };

    for m in head_to_head(registry, team_a_id, team_b_id, matches) {
        let a_is_home = registry.resolve(&m.home) == Some(a);
        let view = if a_is_home { Perspective::home(m) } else { Perspective::away(m) };

        match view.full_time() {
            Outcome::Win  => record.team_a_wins += 1,
            Outcome::Loss => record.team_b_wins += 1,
            Outcome::Draw => record.draws += 1,
        }
    }

    record
}
