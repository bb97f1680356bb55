use serde::Serialize;
use tracing::debug;

use crate::data_loader::MatchRecord;
use crate::outcome::{Outcome, Perspective};
use crate::ranking_context::RankingContext;
use crate::registry::TeamRegistry;

/// Detailed numbers for a single team over a set of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatistics {
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub clean_sheets: u32,

    pub comebacks: u32,
    pub points_from_losing: u32,    // Points taken from matches we trailed at half-time

    pub half_time_leads: u32,
    pub half_time_draws: u32,
    pub half_time_deficits: u32,

    pub home_wins: u32,
    pub home_draws: u32,
    pub home_losses: u32,
    pub away_wins: u32,
    pub away_draws: u32,
    pub away_losses: u32,

    pub first_half_goals: u64,
    pub second_half_goals: u64,

    pub matches_won_from_trailing: u32,
    pub matches_lost_from_leading: u32,
}

impl TeamStatistics {
    pub fn points(&self, ranking_context: &RankingContext) -> u32 {
        self.wins
            .saturating_mul(ranking_context.points_for_win)
            .saturating_add(self.draws.saturating_mul(ranking_context.points_for_draw))
    }

    fn record(&mut self, view: &Perspective, ranking_context: &RankingContext) {
        let half_time = view.half_time();
        let full_time = view.full_time();

        self.matches_played += 1;
        self.goals_for += u64::from(view.full_time_for);
        self.goals_against += u64::from(view.full_time_against);
        self.first_half_goals += u64::from(view.half_time_for);
        self.second_half_goals += u64::from(view.second_half_goals());

        if view.full_time_against == 0 { self.clean_sheets += 1; }

        match (half_time, full_time) {
            (Outcome::Win, Outcome::Loss) => self.matches_lost_from_leading += 1,
            (Outcome::Loss, Outcome::Win) => self.matches_won_from_trailing += 1,
            _ => {}
        }

        match half_time {
            Outcome::Win  => self.half_time_leads += 1,
            Outcome::Draw => self.half_time_draws += 1,
            Outcome::Loss => {
                self.half_time_deficits += 1;
                self.points_from_losing = self.points_from_losing.saturating_add(full_time.points(ranking_context));
            }
        }

        match (full_time, view.is_home) {
            (Outcome::Win, true)   => self.home_wins += 1,
            (Outcome::Win, false)  => self.away_wins += 1,
            (Outcome::Draw, true)  => self.home_draws += 1,
            (Outcome::Draw, false) => self.away_draws += 1,
            (Outcome::Loss, true)  => self.home_losses += 1,
            (Outcome::Loss, false) => self.away_losses += 1,
        }

        match full_time {
            Outcome::Win  => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }

        if view.is_comeback() { self.comebacks += 1; }
    }
}

/// Statistics for `team_id` over `matches`. An unknown id gives an all-zero record.
///
/// Uses the same notion of a usable match as [`crate::generate_standings`], so
/// `matches_played` always equals that team's `played` over the same input.
pub fn compute_team_statistics(
    registry: &TeamRegistry,
    team_id: &str,
    matches: &[MatchRecord],
    ranking_context: &RankingContext,
) -> TeamStatistics {
    let mut stats = TeamStatistics::default();

    let Some(team) = registry.handle_by_id(team_id) else {
        debug!(team_id, "Statistics requested for unknown team");
        return stats;
    };

    for m in matches {
        let Some((home, away)) = registry.resolve_sides(m) else { continue; };

        let view = if home == team {
            Perspective::home(m)
        } else if away == team {
            Perspective::away(m)
        } else {
            continue;
        };

        stats.record(&view, ranking_context);
    }

    stats
}
