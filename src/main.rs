mod logging;

use clap::{Parser, Subcommand};
use ysort_orst::BenchArgs;
use ysort_sprites::SpritesArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    /// Log filter, e.g. `debug` or `ysort_sprites=debug`. Falls back to `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time every way of ordering points by their vertical coordinate
    Bench(BenchArgs),

    /// Depth sorted bouncing sprites
    Sprites(SpritesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    match cli.commands {
        Commands::Bench(bench_args) => bench_args.run(),
        Commands::Sprites(sprites_args) => sprites_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Color, Style};

    let fg = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));

    clap::builder::Styles::styled()
        .usage(fg(AnsiColor::Blue).bold().underline())
        .header(fg(AnsiColor::Blue).bold())
        .literal(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Red).bold())
        .error(fg(AnsiColor::Red).bold())
        .valid(fg(AnsiColor::Cyan).bold().underline())
        .placeholder(fg(AnsiColor::Yellow))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_bench_flags() {
    let cli = Cli::try_parse_from([
        "ysort",
        "bench",
        "-n",
        "500",
        "--strategy",
        "loop",
        "--strategy",
        "priority-queue",
        "--log-level",
        "info",
    ]);
    assert!(cli.is_ok());
}

#[test]
fn seed_requires_shuffle() {
    assert!(Cli::try_parse_from(["ysort", "bench", "--seed", "3"]).is_err());
}

#[test]
fn parses_sprites_bench_flags() {
    let cli = Cli::try_parse_from([
        "ysort",
        "sprites",
        "bench",
        "-n",
        "100",
        "--width",
        "800",
        "--height",
        "600",
        "--strategy",
        "extremum",
        "--table",
    ]);
    assert!(cli.is_ok());
}

#[test]
fn sprites_bench_rejects_infinite_width() {
    assert!(Cli::try_parse_from(["ysort", "sprites", "bench", "--width=-inf"]).is_err());
}
