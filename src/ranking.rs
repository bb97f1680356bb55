use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, trace};

use crate::data_loader::MatchRecord;
use crate::outcome::{Outcome, Perspective};
use crate::ranking_context::RankingContext;
use crate::registry::{TeamEntry, TeamRegistry};

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,

    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub points: u32,

    pub form: Vec<Outcome>,           // Oldest first. Only the latest few survive generate_standings
    pub comebacks: u32,               // Wins after trailing at half-time
    pub half_time_performance: i64,   // Points earned minus points the half-time scores would have given
}

impl TeamStanding {
    pub fn new(team: &TeamEntry) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
            logo_url: team.logo_url.clone(),

            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,

            form: Vec::new(),
            comebacks: 0,
            half_time_performance: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    fn record(&mut self, view: &Perspective, ranking_context: &RankingContext) {
        let outcome = view.full_time();

        // Points scale with the context, so they saturate instead of wrapping
        self.played += 1;
        self.goals_for += u64::from(view.full_time_for);
        self.goals_against += u64::from(view.full_time_against);
        self.points = self.points.saturating_add(outcome.points(ranking_context));
        self.half_time_performance = self.half_time_performance.saturating_add(view.half_time_delta(ranking_context));
        self.form.push(outcome);

        match outcome {
            Outcome::Win  => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }

        if view.is_comeback() { self.comebacks += 1; }
    }
}

/// Builds the full table from scratch. Every registered team gets a row, including teams
/// without a single match, and the result is sorted by [`standings_order`].
///
/// Matches are folded in input order, which is also the order of the form column. Matches with
/// an unknown participant are skipped entirely.
pub fn generate_standings(
    registry: &TeamRegistry,
    matches: &[MatchRecord],
    ranking_context: &RankingContext,
) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = registry.teams().map(TeamStanding::new).collect();

    fold_matches(registry, matches, &mut standings, ranking_context);

    standings.sort_by(standings_order);

    // Form is appended freely while folding and cut once here
    for team in standings.iter_mut() {
        let excess = team.form.len().saturating_sub(ranking_context.form_length);
        team.form.drain(..excess);
    }

    standings
}

// Rows are indexed like the registry, so a handle doubles as a row index until we sort
fn fold_matches(
    registry: &TeamRegistry,
    matches: &[MatchRecord],
    standings: &mut [TeamStanding],
    ranking_context: &RankingContext,
) {
    let mut skipped = 0;

    for m in matches {
        let Some((home, away)) = registry.resolve_sides(m) else {
            trace!(match_id = m.id, home = %m.home.name, away = %m.away.name, "Unresolved match");
            skipped += 1;
            continue;
        };

        standings[home.index()].record(&Perspective::home(m), ranking_context);
        standings[away.index()].record(&Perspective::away(m), ranking_context);
    }

    debug!(matches = matches.len(), skipped, "Folded matches into standings");
}

/// Points, then goal difference, then goals scored (all descending), then name ascending.
pub fn standings_order(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points.cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.name.cmp(&b.name))
}
