//! Matchcast terminal dashboard
//!
//! Thin presentation shell over `mc_core`: one-shot table/detail/feed views
//! plus an interval-driven watch loop (slow timer refreshes lifecycle state,
//! fast timer appends one live event).

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use mc_core::{Dashboard, DashboardConfig, MatchEvent, MatchState, SystemClock};

#[derive(Parser)]
#[command(name = "matchcast")]
#[command(about = "NPFL live match dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's match list
    Today {
        /// Emit the JSON API payload instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print one match's detail view (state, timeline, statistics)
    Detail {
        /// Match index within today's fixture set
        #[arg(long)]
        index: usize,

        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the service health snapshot
    Health,

    /// Run the refreshing dashboard loop
    Watch {
        /// Stop after this many refresh cycles (runs until interrupted if omitted)
        #[arg(long)]
        cycles: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = DashboardConfig::from_env();
    let mut dashboard = Dashboard::new(&config);

    match cli.command {
        Commands::Today { json } => {
            if json {
                println!("{}", mc_core::today_json(&dashboard)?);
            } else {
                render_today(&dashboard.today());
            }
        }
        Commands::Detail { index, json } => {
            if json {
                println!("{}", mc_core::match_detail_json(&mut dashboard, index)?);
            } else {
                let detail = dashboard.match_detail(index)?;
                render_detail(&detail);
            }
        }
        Commands::Health => {
            println!("{}", mc_core::health_json(&dashboard)?);
        }
        Commands::Watch { cycles } => {
            watch(&mut dashboard, &config, cycles);
        }
    }

    Ok(())
}

fn watch(dashboard: &mut Dashboard<SystemClock>, config: &DashboardConfig, cycles: Option<u32>) {
    log::info!(
        "Watching: refresh every {}s, live event every {}s",
        config.refresh_secs,
        config.event_secs
    );

    // A zero interval would starve the loop
    let event_secs = config.event_secs.max(1);
    let refresh_secs = config.refresh_secs.max(1);

    let mut elapsed_secs: u64 = 0;
    let mut refreshes: u32 = 0;
    render_today(&dashboard.today());

    loop {
        thread::sleep(Duration::from_secs(1));
        elapsed_secs += 1;

        if elapsed_secs % event_secs == 0 {
            if let Some(event) = dashboard.tick_feed() {
                println!("  {}", format_event(&event));
            }
        }

        if elapsed_secs % refresh_secs == 0 {
            refreshes += 1;
            render_today(&dashboard.today());
            render_feed(dashboard.feed());
            if let Some(limit) = cycles {
                if refreshes >= limit {
                    log::info!("Completed {} refresh cycles, stopping", refreshes);
                    break;
                }
            }
        }
    }
}

fn render_today(states: &[MatchState]) {
    println!();
    println!("{:<24} {:>2}-{:<2} {:<24} {:>6}  {}", "HOME", "", "", "AWAY", "TIME", "VENUE");
    for state in states {
        println!(
            "{:<24} {:>2}-{:<2} {:<24} {:>6}  {}",
            state.home_team,
            state.home_score,
            state.away_score,
            state.away_team,
            state.elapsed,
            state.venue
        );
    }
}

fn render_detail(detail: &mc_core::MatchDetail) {
    let state = &detail.state;
    println!(
        "{} {} - {} {}  [{}]",
        state.home_team, state.home_score, state.away_score, state.away_team, state.elapsed
    );
    println!("Venue: {}", state.venue);
    println!();
    for event in &detail.events {
        println!("  {}", format_event(event));
    }
    println!();
    let stats = &detail.statistics;
    println!("Possession  {:>3}% - {:<3}%", stats.possession_home, stats.possession_away);
    println!("Shots       {:>4} - {:<4}", stats.shots_home, stats.shots_away);
    println!(
        "On target   {:>4} - {:<4}",
        stats.shots_on_target_home, stats.shots_on_target_away
    );
    println!("Corners     {:>4} - {:<4}", stats.corners_home, stats.corners_away);
    println!("Fouls       {:>4} - {:<4}", stats.fouls_home, stats.fouls_away);
}

fn render_feed(events: &[MatchEvent]) {
    if events.is_empty() {
        return;
    }
    println!();
    println!("LIVE FEED");
    for event in events {
        println!("  {}", format_event(event));
    }
}

fn format_event(event: &MatchEvent) -> String {
    format!(
        "{:>3}' {:<12} {} ({}) - {}",
        event.minute,
        event.event_type.label(),
        event.player,
        event.team,
        event.detail
    )
}
