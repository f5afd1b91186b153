//! # Introduction
//!
//! Bouncing sprites that are depth sorted every frame before they are drawn, so the ones lower on
//! the screen end up in front.
//!
//! The window itself lives behind the `window` feature (on by default). Everything else
//! (generating, sorting and moving sprites) works without SDL2.

mod error;
pub mod frame;
pub mod generate;
pub mod motion;
pub mod scene;
pub mod sheet;
pub mod sprite;
#[cfg(feature = "window")]
pub mod stage;

pub use error::{Error, Result};

use clap::{Args, Subcommand};
use generate::Bounds;
use rand::{rngs::StdRng, SeedableRng};
use ysort_orst::orst::benchmark::{run_solutions, BenchOptions};
use ysort_orst::orst::{Order, Strategy};

/// Depth sorted sprites. Install the `ysort` binary and run `ysort sprites --help` to see what
/// options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SpritesArgs {
    #[command(subcommand)]
    command: SpritesCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SpritesCommands {
    /// Open a window and bounce sprites around it. Left click adds a sprite, Escape quits.
    #[cfg(feature = "window")]
    Run {
        /// Sprite sheet with 7 columns and 3 rows of 70x110 cells.
        #[arg(long, default_value = sheet::DEFAULT_SHEET)]
        texture: std::path::PathBuf,

        /// Random sprites added on top of one per sheet cell.
        #[arg(long, default_value_t = 5000)]
        extra: usize,

        /// How sprites are put in drawing order every frame.
        #[arg(short, long, value_enum, default_value_t = Strategy::StableSort)]
        strategy: Strategy,

        #[arg(long, default_value_t = frame::DEFAULT_FPS)]
        fps: u32,

        /// Open a window instead of going fullscreen.
        #[arg(long)]
        windowed: bool,

        /// Window width with `--windowed`.
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Window height with `--windowed`.
        #[arg(long, default_value_t = 720)]
        height: u32,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Time the sorting strategies on random sprites, without opening a window.
    Bench {
        /// Number of sprites.
        #[arg(short = 'n', long, default_value_t = 5021)]
        count: usize,

        /// Width of the area sprites are placed in.
        #[arg(long, default_value_t = 1920.0, value_parser = parse_extent)]
        width: f32,

        /// Height of the area sprites are placed in.
        #[arg(long, default_value_t = 1080.0, value_parser = parse_extent)]
        height: f32,

        /// Strategies to run, in order. Defaults to all of them.
        #[arg(short, long = "strategy", value_enum)]
        strategies: Vec<Strategy>,

        #[arg(long)]
        seed: Option<u64>,

        /// Skip O(n²) strategies above this many sprites.
        #[arg(long, default_value_t = 100_000)]
        quadratic_limit: usize,

        /// Count key comparisons with a second run of every strategy.
        #[arg(long)]
        comparisons: bool,

        /// Also print a summary table.
        #[arg(long)]
        table: bool,
    },
}

// Screen sizes must be finite and positive.
fn parse_extent(value: &str) -> anyhow::Result<f32> {
    let extent: f32 = value.parse()?;
    anyhow::ensure!(
        extent.is_finite() && extent > 0.0,
        "`{value}` is not a finite positive size"
    );
    Ok(extent)
}

impl SpritesArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            #[cfg(feature = "window")]
            SpritesCommands::Run {
                texture,
                extra,
                strategy,
                fps,
                windowed,
                width,
                height,
                seed,
            } => {
                use anyhow::Context;

                let config = stage::StageConfig {
                    fullscreen: !windowed,
                    width,
                    height,
                    ..Default::default()
                };
                let options = stage::AnimationOptions {
                    sheet: texture,
                    extra,
                    strategy,
                    fps,
                    seed,
                };

                stage::animate(&config, &options).context("sprite animation failed")
            }

            SpritesCommands::Bench {
                count,
                width,
                height,
                strategies,
                seed,
                quadratic_limit,
                comparisons,
                table,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let sprites =
                    generate::random_sprites(&mut rng, Bounds::new(width, height), count);

                let strategies = if strategies.is_empty() {
                    Strategy::ALL.to_vec()
                } else {
                    strategies
                };

                let options = BenchOptions {
                    order: Order::Ascending,
                    quadratic_limit: Some(quadratic_limit),
                    count_comparisons: comparisons || table,
                    progress: true,
                };

                let report = run_solutions(&sprites, &strategies, &options)?;
                println!("{report}");
                if table {
                    println!();
                    report.print_table();
                }

                anyhow::ensure!(
                    report.all_ordered(),
                    "at least one strategy produced out of order output"
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(clap::Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(clap::Subcommand)]
    enum Command {
        Sprites(SpritesArgs),
    }

    fn parse(args: &[&str]) -> std::result::Result<SpritesArgs, clap::Error> {
        use clap::Parser;
        let args = ["ysort", "sprites"].into_iter().chain(args.iter().copied());
        let Command::Sprites(sprites) = Cli::try_parse_from(args)?.command;
        Ok(sprites)
    }

    #[test]
    fn extent_must_be_finite_and_positive() {
        assert_eq!(parse_extent("640").unwrap(), 640.0);
        for bad in ["-inf", "inf", "NaN", "0", "-2147483648", "wide"] {
            assert!(parse_extent(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn bench_rejects_bad_sizes() {
        assert!(parse(&["bench", "--width=-inf"]).is_err());
        assert!(parse(&["bench", "--height=-2147483648"]).is_err());
        assert!(parse(&["bench", "--width", "800", "--height", "600"]).is_ok());
    }

    #[test]
    fn bench_runs_on_a_few_sprites() {
        let args = parse(&[
            "bench",
            "-n",
            "50",
            "--seed",
            "4",
            "--strategy",
            "loop",
            "--strategy",
            "stable-sort",
            "--comparisons",
        ])
        .unwrap();

        args.run().unwrap();
    }
}
