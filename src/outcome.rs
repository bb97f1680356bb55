use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data_loader::MatchRecord;
use crate::ranking_context::RankingContext;

/// Result of a scoreline from one team's point of view. At half-time, `Win` reads as "ahead".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn from_scores(ours: u16, theirs: u16) -> Self {
        match ours.cmp(&theirs) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal   => Outcome::Draw,
            Ordering::Less    => Outcome::Loss,
        }
    }

    pub fn points(self, ranking_context: &RankingContext) -> u32 {
        match self {
            Outcome::Win  => ranking_context.points_for_win,
            Outcome::Draw => ranking_context.points_for_draw,
            Outcome::Loss => 0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Outcome::Win  => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

/// One match seen from one side. Both aggregators classify through this so they can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perspective {
    pub is_home: bool,
    pub half_time_for: u16,
    pub half_time_against: u16,
    pub full_time_for: u16,
    pub full_time_against: u16,
}

impl Perspective {
    pub fn home(m: &MatchRecord) -> Self {
        Self {
            is_home: true,
            half_time_for: m.home_half_time_score,
            half_time_against: m.away_half_time_score,
            full_time_for: m.home_full_time_score,
            full_time_against: m.away_full_time_score,
        }
    }

    pub fn away(m: &MatchRecord) -> Self {
        Self {
            is_home: false,
            half_time_for: m.away_half_time_score,
            half_time_against: m.home_half_time_score,
            full_time_for: m.away_full_time_score,
            full_time_against: m.home_full_time_score,
        }
    }

    pub fn half_time(&self) -> Outcome {
        Outcome::from_scores(self.half_time_for, self.half_time_against)
    }

    pub fn full_time(&self) -> Outcome {
        Outcome::from_scores(self.full_time_for, self.full_time_against)
    }

    pub fn is_comeback(&self) -> bool {
        self.half_time() == Outcome::Loss && self.full_time() == Outcome::Win
    }

    // Points earned minus the points the half-time scoreline would have given
    pub fn half_time_delta(&self, ranking_context: &RankingContext) -> i64 {
        i64::from(self.full_time().points(ranking_context)) - i64::from(self.half_time().points(ranking_context))
    }

    // Clamped at zero for records where half-time exceeds full-time
    pub fn second_half_goals(&self) -> u16 {
        self.full_time_for.saturating_sub(self.half_time_for)
    }
}
