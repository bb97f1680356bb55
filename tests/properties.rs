use rand::prelude::*;
use rand::rngs::StdRng;

use league_table::*;

const TEAMS: [(&str, &str); 6] = [
    ("arsenal", "London Ágyúk"),
    ("brentford", "Brentford"),
    ("chelsea", "Chelsea"),
    ("everton", "Everton"),
    ("fulham", "Fulham"),
    ("wolves", "Wolverhampton"),
];

fn registry() -> TeamRegistry {
    TeamRegistry::new(TEAMS.iter().map(|(id, name)| TeamEntry::new(*id, *name)).collect()).unwrap()
}

fn identity(rng: &mut StdRng, idx: usize) -> TeamIdentity {
    if idx == TEAMS.len() {
        return TeamIdentity::named("Nowhere Rovers");
    }
    // Mix of name-only and id-carrying records, like the real feeds
    if rng.random_bool(0.5) {
        TeamIdentity::with_id(TEAMS[idx].1, TEAMS[idx].0)
    } else {
        TeamIdentity::named(TEAMS[idx].1)
    }
}

// Random season with the odd unknown team and self-match thrown in
fn random_matches(seed: u64, count: usize) -> Vec<MatchRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matches = Vec::with_capacity(count);

    for id in 0..count {
        let home = rng.random_range(0..=TEAMS.len());
        let away = rng.random_range(0..=TEAMS.len());

        let home_half = rng.random_range(0..3u16);
        let away_half = rng.random_range(0..3u16);

        matches.push(MatchRecord {
            id: id as u64,
            season: 20320,
            matchday: rng.random_range(1..=30),
            home: identity(&mut rng, home),
            away: identity(&mut rng, away),
            home_half_time_score: home_half,
            away_half_time_score: away_half,
            home_full_time_score: home_half + rng.random_range(0..3u16),
            away_full_time_score: away_half + rng.random_range(0..3u16),
        });
    }

    matches
}

fn usable(registry: &TeamRegistry, matches: &[MatchRecord]) -> usize {
    matches.iter().filter(|m| registry.resolve_sides(m).is_some()).count()
}

#[test]
fn goals_and_appearances_are_conserved() {
    let registry = registry();
    for seed in 0..20 {
        let matches = random_matches(seed, 120);
        let table = generate_standings(&registry, &matches, &RankingContext::default());

        let goals_for: u64 = table.iter().map(|t| t.goals_for).sum();
        let goals_against: u64 = table.iter().map(|t| t.goals_against).sum();
        let played: u32 = table.iter().map(|t| t.played).sum();

        assert_eq!(goals_for, goals_against);
        assert_eq!(played as usize, 2 * usable(&registry, &matches));
        assert_eq!(table.len(), registry.len());
    }
}

#[test]
fn points_match_results_and_form_is_bounded() {
    let registry = registry();
    for seed in 0..20 {
        let table = generate_standings(&registry, &random_matches(seed, 120), &RankingContext::default());

        for team in &table {
            assert_eq!(team.points, 3 * team.won + team.drawn);
            assert_eq!(team.played, team.won + team.drawn + team.lost);
            assert!(team.form.len() <= 5);
            assert!(team.comebacks <= team.won);
        }
    }
}

#[test]
fn table_is_totally_ordered() {
    let registry = registry();
    for seed in 0..20 {
        let table = generate_standings(&registry, &random_matches(seed, 60), &RankingContext::default());

        for pair in table.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = a.points > b.points
                || (a.points == b.points && a.goal_difference() > b.goal_difference())
                || (a.points == b.points && a.goal_difference() == b.goal_difference() && a.goals_for > b.goals_for)
                || (a.points == b.points
                    && a.goal_difference() == b.goal_difference()
                    && a.goals_for == b.goals_for
                    && a.name <= b.name);
            assert!(ordered, "{} should not rank above {}", a.name, b.name);
        }
    }
}

#[test]
fn standings_are_idempotent() {
    let registry = registry();
    let matches = random_matches(42, 200);
    let ctx = RankingContext::default();

    assert_eq!(generate_standings(&registry, &matches, &ctx), generate_standings(&registry, &matches, &ctx));
}

#[test]
fn statistics_agree_with_standings() {
    let registry = registry();
    let ctx = RankingContext::default();

    for seed in 0..20 {
        let matches = random_matches(seed, 120);
        let table = generate_standings(&registry, &matches, &ctx);

        for team in &table {
            let stats = compute_team_statistics(&registry, &team.id, &matches, &ctx);

            assert_eq!(stats.matches_played, team.played);
            assert_eq!(stats.wins + stats.draws + stats.losses, stats.matches_played);
            assert_eq!((stats.wins, stats.draws, stats.losses), (team.won, team.drawn, team.lost));
            assert_eq!((stats.goals_for, stats.goals_against), (team.goals_for, team.goals_against));
            assert_eq!(stats.comebacks, team.comebacks);
            assert_eq!(stats.points(&ctx), team.points);
            assert_eq!(stats.first_half_goals + stats.second_half_goals, stats.goals_for);
            assert_eq!(matches_for_team(&registry, &team.id, &matches).len() as u32, team.played);
        }
    }
}

#[test]
fn half_time_performance_matches_its_definition() {
    let registry = registry();
    let ctx = RankingContext::default();
    let matches = random_matches(7, 150);
    let table = generate_standings(&registry, &matches, &ctx);

    for team in &table {
        let handle = registry.handle_by_id(&team.id).unwrap();
        let mut half_time_points = 0i64;

        for m in &matches {
            let Some((home, away)) = registry.resolve_sides(m) else { continue; };
            let view = if home == handle {
                Perspective::home(m)
            } else if away == handle {
                Perspective::away(m)
            } else {
                continue;
            };
            half_time_points += i64::from(view.half_time().points(&ctx));
        }

        assert_eq!(team.half_time_performance, i64::from(team.points) - half_time_points);
    }
}

#[test]
fn head_to_head_is_a_subset_of_both_listings() {
    let registry = registry();
    let matches = random_matches(3, 150);

    let h2h = head_to_head(&registry, "chelsea", "fulham", &matches);
    let chelsea = matches_for_team(&registry, "chelsea", &matches);
    let fulham = matches_for_team(&registry, "fulham", &matches);

    for m in &h2h {
        assert!(chelsea.iter().any(|c| c.id == m.id));
        assert!(fulham.iter().any(|f| f.id == m.id));
    }
    assert!(h2h.windows(2).all(|w| w[0].matchday <= w[1].matchday));

    let record = head_to_head_record(&registry, "chelsea", "fulham", &matches);
    assert_eq!((record.team_a_wins + record.team_b_wins + record.draws) as usize, h2h.len());
}
