//! Binary entrypoint for the scratchcard CLI.
//!
//! Commands:
//! - `play` - run the interactive game (default when no command is given)
//! - `init` - create a starter `config.toml`
//! - `odds` - print the prize table and expected payout
//! - `simulate --draws <n> [--seed <s>] [--json]` - bulk-draw frequency report
//!
//! See the library crate docs for module-level details: `scratchcard::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Use the published library crate modules instead of redefining them here.
use scratchcard::config::Config;
use scratchcard::game::{PrizeDrawer, Session, SessionOptions};

#[derive(Parser)]
#[command(name = "scratchcard")]
#[command(about = "An interactive scratch-card game for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the interactive scratch-card game
    Play,
    /// Initialize a new game configuration file
    Init,
    /// Show the prize table, probabilities, and expected payout
    Odds,
    /// Draw many times and report empirical vs declared frequencies
    Simulate {
        /// Number of draws to perform
        #[arg(short, long, default_value_t = 100_000)]
        draws: u64,
        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// Emit the report as a JSON payload
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // Load config early to configure logging (except for Init which writes it)
    let pre_config = match &command {
        Commands::Init => None,
        _ => load_or_default(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match command {
        Commands::Play => {
            let config = match pre_config {
                Some(config) => config,
                None => load_or_default(&cli.config).await?,
            };
            let table = config.validate()?;
            info!("Starting scratchcard v{}", env!("CARGO_PKG_VERSION"));

            let options = SessionOptions {
                title: config.game.title.clone(),
                fallback_name: config.game.fallback_name.clone(),
                cover_line_delay: config.animation.cover_delay(),
                reveal_line_delay: config.animation.reveal_delay(),
            };

            // The session blocks on console reads; run it off the runtime and
            // race it against Ctrl-C so interrupts turn into a goodbye instead
            // of an abort mid-animation.
            let session_task = tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                let drawer = PrizeDrawer::new(table, StdRng::from_entropy());
                // Unlocked stdout: per-write locking, so the interrupt path
                // below can still print while this thread blocks on a read.
                let mut session = Session::new(stdin.lock(), std::io::stdout(), drawer, options);
                session.run()
            });

            tokio::select! {
                res = session_task => {
                    res.map_err(|e| anyhow!("session task failed: {}", e))??;
                    info!("Session finished normally");
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    println!("\n\nGame interrupted! Thanks for playing!");
                    // The session thread is still parked in a blocking read;
                    // exit now rather than waiting on it during runtime
                    // shutdown.
                    std::process::exit(0);
                }
            }
        }
        Commands::Init => {
            info!("Initializing new game configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote starter configuration to {}", cli.config);
        }
        Commands::Odds => {
            let config = match pre_config {
                Some(config) => config,
                None => load_or_default(&cli.config).await?,
            };
            let table = config.validate()?;
            let total = table.total_weight();
            println!("Prize table:");
            for prize in table.entries() {
                println!(
                    "  {:<12} {:>7.3}%  {:>5} coins",
                    prize.id,
                    prize.weight / total * 100.0,
                    prize.payout
                );
            }
            println!("Expected payout per play: {:.2} coins", table.expected_payout());
        }
        Commands::Simulate { draws, seed, json } => {
            let config = match pre_config {
                Some(config) => config,
                None => load_or_default(&cli.config).await?,
            };
            let table = config.validate()?;
            if draws == 0 {
                return Err(anyhow!("simulate requires at least one draw"));
            }
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            info!("Simulating {} draws (seed: {:?})", draws, seed);

            let mut counts = vec![0u64; table.entries().len()];
            for _ in 0..draws {
                let drawn = table.draw(&mut rng);
                // Entry count is tiny; a linear scan beats carrying an index map.
                if let Some(idx) = table.entries().iter().position(|p| p.id == drawn.id) {
                    counts[idx] += 1;
                }
            }

            let total = table.total_weight();
            if json {
                let results: Vec<serde_json::Value> = table
                    .entries()
                    .iter()
                    .zip(&counts)
                    .map(|(prize, &count)| {
                        serde_json::json!({
                            "id": prize.id,
                            "payout": prize.payout,
                            "declared": prize.weight / total,
                            "observed": count as f64 / draws as f64,
                            "count": count,
                        })
                    })
                    .collect();
                let payload = serde_json::json!({
                    "draws": draws,
                    "seed": seed,
                    "expected_payout": table.expected_payout(),
                    "results": results,
                });
                println!("{}", payload);
            } else {
                println!("{} draws:", draws);
                println!("  {:<12} {:>10} {:>10} {:>10}", "prize", "declared", "observed", "count");
                for (prize, &count) in table.entries().iter().zip(&counts) {
                    println!(
                        "  {:<12} {:>9.3}% {:>9.3}% {:>10}",
                        prize.id,
                        prize.weight / total * 100.0,
                        count as f64 / draws as f64 * 100.0,
                        count
                    );
                }
                println!("Expected payout per play: {:.2} coins", table.expected_payout());
            }
        }
    }

    Ok(())
}

/// Read the config file when it exists; otherwise fall back to defaults so
/// the game runs out of the box without an `init` step.
async fn load_or_default(path: &str) -> Result<Config> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        Config::load(path).await
    } else {
        Ok(Config::default())
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config. The default is quiet so
    // log lines never interleave with the card animation.
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(file) = config.as_ref().and_then(|c| c.logging.file.clone()) {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // If stdout is a TTY we are mid-game; keep the console clean and
            // send log lines to the file only.
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    Ok(())
                } else {
                    writeln!(fmt, "{}", line)
                }
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
