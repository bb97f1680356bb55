use std::fmt::Display;

use league_table::*;

pub fn output_report(standings: &[TeamStanding]) {
    println!("|  #  | {0:24} | {1:>3} | {2:>3} | {3:>3} | {4:>3} | {5:>7} | {6:>4} | {7:>3} | {8:5} | {9:>3} | {10:>4}",
        "Team", "P", "W", "D", "L", "Goals", "GD", "Pts", "Form", "CB", "HTP",
    );

    for (i, t) in standings.iter().enumerate() {
        let form: String = t.form.iter().map(|o| o.letter()).collect();

        println!("| {0:3} | {1:24} | {2:3} | {3:3} | {4:3} | {5:3} | {6:>7} | {7:>+4} | {8:3} | {9:5} | {10:3} | {11:>+4}",
            i + 1,
            t.name,
            t.played,
            t.won,
            t.drawn,
            t.lost,
            format!("{}:{}", t.goals_for, t.goals_against),
            t.goal_difference(),
            t.points,
            form,
            t.comebacks,
            t.half_time_performance,
        )
    }
}

pub fn output_leaders<T: Display>(title: &str, leaders: &[&TeamStanding], value: impl Fn(&TeamStanding) -> T) {
    println!("\n{title}");
    for (i, &t) in leaders.iter().enumerate() {
        println!("  {0}. {1:24} {2:>5}", i + 1, t.name, value(t));
    }
}

pub fn output_statistics(team: &TeamEntry, stats: &TeamStatistics) {
    println!("\n{} ({} matches)", team.name, stats.matches_played);
    println!("  Record        W {0} | D {1} | L {2}", stats.wins, stats.draws, stats.losses);
    println!("  Home          W {0} | D {1} | L {2}", stats.home_wins, stats.home_draws, stats.home_losses);
    println!("  Away          W {0} | D {1} | L {2}", stats.away_wins, stats.away_draws, stats.away_losses);
    println!("  Goals         {0}:{1} | 1st half {2} | 2nd half {3} | Clean sheets {4}",
        stats.goals_for, stats.goals_against, stats.first_half_goals, stats.second_half_goals, stats.clean_sheets,
    );
    println!("  Half-time     Ahead {0} | Level {1} | Behind {2}",
        stats.half_time_leads, stats.half_time_draws, stats.half_time_deficits,
    );
    println!("  Turnarounds   Comebacks {0} | Points from losing {1} | Lost from leading {2}",
        stats.comebacks, stats.points_from_losing, stats.matches_lost_from_leading,
    );
}

pub fn output_matches(title: &str, matches: &[&MatchRecord]) {
    println!("\n{title}");
    for m in matches {
        println!("  {0:5} | MD {1:2} | {2:>24} {3}-{4} ({5}-{6}) {7}",
            m.season,
            m.matchday,
            m.home.name,
            m.home_full_time_score,
            m.away_full_time_score,
            m.home_half_time_score,
            m.away_half_time_score,
            m.away.name,
        );
    }
}

pub fn output_head_to_head(team_a: &TeamEntry, team_b: &TeamEntry, record: &HeadToHeadRecord) {
    println!("  {0} wins {1} | Draws {2} | {3} wins {4}",
        team_a.name, record.team_a_wins, record.draws, team_b.name, record.team_b_wins,
    );
}
