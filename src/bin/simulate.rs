//! Simulate - bot-vs-bot Liar's Dice games.
//!
//! Every seat is played by the built-in fallback policy. Useful for checking
//! the engine end to end and for eyeballing game length and win spread.

use std::collections::BTreeMap;

use clap::Parser;
use liars_dice::core::GameRng;
use liars_dice::decision::FallbackProvider;
use liars_dice::engine::{GameOutcome, RoundEngineBuilder};
use liars_dice::observer::TracingObserver;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Run bot-vs-bot Liar's Dice games")]
struct Args {
    /// Number of players per game
    #[arg(short, long, default_value = "4")]
    players: u8,

    /// Dice each player starts with
    #[arg(short, long, default_value = "5")]
    dice: u32,

    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game `n` uses `seed + n`. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on a game after this many turns
    #[arg(long, default_value = "10000")]
    max_turns: u32,

    /// Log every game event
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet apart from our own summary.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose {
            "info"
        } else {
            "warn,simulate=info"
        })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(
        players = args.players,
        dice = args.dice,
        games = args.games,
        base_seed,
        "starting simulation"
    );

    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut unfinished = 0u32;

    for game in 0..args.games {
        let seed = base_seed.wrapping_add(u64::from(game));
        let bots = GameRng::new(seed).for_context("bots");

        let mut builder = RoundEngineBuilder::new()
            .dice_per_player(args.dice)
            .seed(seed)
            .decision_timeout(None);
        for seat in 0..args.players {
            let rng = bots.for_context(&format!("seat-{seat}"));
            builder = builder.seat(format!("Bot {seat}"), FallbackProvider::new(rng));
        }

        let mut engine = builder.build(TracingObserver::new())?;
        match engine.run(args.max_turns) {
            GameOutcome::Winner(winner) => {
                let name = engine.state().name(winner).to_string();
                info!(
                    game,
                    seed,
                    winner = %name,
                    rounds = engine.state().round(),
                    turns = engine.state().turn(),
                    "game finished"
                );
                *wins.entry(name).or_default() += 1;
            }
            GameOutcome::TurnLimit => {
                warn!(game, seed, max_turns = args.max_turns, "game hit the turn limit");
                unfinished += 1;
            }
        }
    }

    for (name, count) in &wins {
        info!(player = %name, wins = count, "tally");
    }
    if unfinished > 0 {
        warn!(unfinished, "some games did not finish");
    }

    Ok(())
}
