//! Draw lottery tickets from the command line.
//!
//! ```bash
//! lotto
//! lotto --tickets 5 --seed 42
//! lotto --unique --json
//! ```
//!
//! Each ticket is printed as `a, b, c, d, e, f, ` on its own line, or as one
//! JSON object per line with `--json`. Logs go to stderr (`RUST_LOG`).

use std::io::{self, Write};

use clap::Parser;
use lotto_draw::{LottoRng, NumberSet, DEFAULT_HIGH, DEFAULT_LOW};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Draw six lottery numbers")]
struct Args {
    /// Seed for a reproducible draw.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of tickets to draw.
    #[arg(long, default_value_t = 1)]
    tickets: u32,

    /// Reject repeated numbers within a ticket.
    #[arg(long)]
    unique: bool,

    /// Print each ticket as a JSON object.
    #[arg(long)]
    json: bool,

    /// Lowest number that can be drawn.
    #[arg(long, default_value_t = DEFAULT_LOW)]
    low: u32,

    /// Highest number that can be drawn.
    #[arg(long, default_value_t = DEFAULT_HIGH)]
    high: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let rng = match args.seed {
        Some(seed) => LottoRng::seeded(args.low, args.high, seed)?,
        None => LottoRng::new(args.low, args.high)?,
    };
    tracing::info!(low = args.low, high = args.high, seed = ?args.seed, "drawing {} ticket(s)", args.tickets);

    let mut set = NumberSet::new(rng);
    let mut out = io::stdout().lock();

    for _ in 0..args.tickets {
        if args.unique {
            set.draw_unique()?;
        } else {
            set.draw()?;
        }

        if args.json {
            serde_json::to_writer(&mut out, &set.summary())?;
            writeln!(out)?;
        } else {
            set.write_line(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
