mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use league_table::*;
use report::*;

/// Builds the league table from season result files
#[derive(Parser, Debug)]
#[command(name = "league_table", version, about)]
struct Config {
    /// Team registry (JSON array of {id, name, logoUrl, weight, league})
    #[arg(long, env = "LEAGUE_TEAMS", default_value = "data/teams.json")]
    teams: PathBuf,

    /// Optional JSON file overriding the table model (points, form length, ...)
    #[arg(long, env = "LEAGUE_CONTEXT")]
    context: Option<PathBuf>,

    /// Only count this season
    #[arg(long)]
    season: Option<u32>,

    /// Show detailed statistics and matches for this team id
    #[arg(long)]
    team: Option<String>,

    /// How many entries the latest-matches and leader summaries show
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// With --team, show the head-to-head against this team id
    #[arg(long, requires = "team")]
    versus: Option<String>,

    /// Season CSV files, e.g. data/20320.csv. Folded in the order given
    #[arg(required = true)]
    seasons: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let ranking_context = match &config.context {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read context file: {}", path.display()))?;
            RankingContext::from_json(&data).context("Invalid context file")?
        }
        None => RankingContext::default(),
    };

    let registry = load_registry(&config.teams)
        .with_context(|| format!("Failed to load teams: {}", config.teams.display()))?;
    info!("Loaded {} teams", registry.len());

    let mut matches = load_seasons(&config.seasons, &registry, &ranking_context)
        .context("Failed to load season files")?;

    if let Some(season) = config.season {
        matches = matches_in_season(season, &matches).into_iter().cloned().collect();
    }
    info!("Loaded {} matches from {} file(s)", matches.len(), config.seasons.len());

    let standings = generate_standings(&registry, &matches, &ranking_context);
    output_report(&standings);

    output_matches("Latest matches", &latest_matches(&matches, config.top));
    output_leaders("Top scorers", &leaders_by(&standings, config.top, |t| t.goals_for), |t| t.goals_for);
    output_leaders("Comeback kings", &leaders_by(&standings, config.top, |t| t.comebacks), |t| t.comebacks);

    let Some(team_id) = config.team.as_deref() else { return Ok(()); };
    let team = registry
        .resolve_by_id(team_id)
        .with_context(|| format!("Unknown team id: {team_id}"))?;

    let stats = compute_team_statistics(&registry, team_id, &matches, &ranking_context);
    output_statistics(team, &stats);

    let team_matches = matches_for_team(&registry, team_id, &matches);
    let recent = &team_matches[team_matches.len().saturating_sub(ranking_context.form_length)..];
    output_matches("Recent matches", recent);

    if let Some(other_id) = config.versus.as_deref() {
        let other = registry
            .resolve_by_id(other_id)
            .with_context(|| format!("Unknown team id: {other_id}"))?;

        let h2h = head_to_head(&registry, team_id, other_id, &matches);
        output_matches(&format!("{} vs {}", team.name, other.name), &h2h);
        output_head_to_head(team, other, &head_to_head_record(&registry, team_id, other_id, &matches));
    }

    Ok(())
}
