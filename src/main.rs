//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use vlr_picks::{
    cli::{Commands, VlrPicks},
    commands::{
        picks::{handle_picks, PicksParams},
        player_stats::{handle_player_stats, StatsParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = VlrPicks::parse();

    match app.command {
        Commands::Picks {
            filters,
            risk,
            stats,
            search,
            min_confidence,
            top,
            json,
            verbose,
        } => {
            handle_picks(PicksParams {
                filters,
                risk,
                stats,
                search,
                min_confidence,
                top,
                as_json: json,
                verbose,
            })
            .await?
        }

        Commands::Stats {
            filters,
            json,
            verbose,
        } => {
            handle_player_stats(StatsParams {
                filters,
                as_json: json,
                verbose,
            })
            .await?
        }
    }

    Ok(())
}
