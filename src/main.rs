//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    build_engine, run_simulation,
    config::{CliOverrides, Settings},
    game_of_life::{save_grid_to_file, Grid},
    patterns::{write_builtin_patterns, PatternLibrary},
    utils::{ColorOutput, GridFormatter, TerminalRenderer},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run and animate a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of steps (overrides config)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Seed pattern name, e.g. "random", "mixed pattern", "acorn" (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Pattern argument; repeat for several (e.g. --arg 20 --arg 40)
        #[arg(short, long = "arg")]
        args: Vec<usize>,

        /// Fixed RNG seed
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Pattern library directory (overrides config)
        #[arg(long)]
        pattern_dir: Option<PathBuf>,

        /// Frame interval in milliseconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Write the final grid to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip drawing frames, only report the final state
        #[arg(long)]
        no_render: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the patterns found in the library directory
    Patterns {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern library directory (overrides config)
        #[arg(long)]
        pattern_dir: Option<PathBuf>,
    },

    /// Create a default configuration and the bundled pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    init_tracing(verbose);

    match cli.command {
        Commands::Run {
            config, rows, cols, steps, pattern, args, rng_seed,
            pattern_dir, interval, output, no_render, verbose
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                steps,
                pattern,
                args,
                rng_seed,
                pattern_dir,
                refresh_interval_ms: interval,
                final_state_file: output,
            };
            run_command(config, overrides, no_render, verbose)
        }
        Commands::Patterns { config, pattern_dir } => {
            patterns_command(config, pattern_dir)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn load_library(settings: &Settings) -> PatternLibrary {
    let directory = &settings.patterns.directory;
    match PatternLibrary::scan(directory) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("{}", ColorOutput::warning(&format!(
                "Pattern directory {} unavailable ({}), only procedural patterns can be used",
                directory.display(), e
            )));
            PatternLibrary::default()
        }
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, no_render: bool, verbose: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    if verbose {
        let seed = settings.simulation.seed.as_ref()
            .map(|s| format!("{} {:?}", s.pattern, s.args))
            .unwrap_or_else(|| "random (default)".to_string());
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.simulation.rows, settings.simulation.cols);
        println!("  Steps: {}", settings.simulation.steps);
        println!("  Seed: {}", seed);
        println!("  Boundary: {:?}", settings.simulation.boundary);
        println!("  Patterns: {}", settings.patterns.directory.display());
        println!();
    }

    let library = load_library(&settings);

    let mut rng = match settings.simulation.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut engine = build_engine(&settings, &library, &mut rng)
        .context("Failed to create the initial grid")?;

    let start_time = Instant::now();
    if no_render {
        let mut skip = |_: usize, _: &Grid| -> Result<()> { Ok(()) };
        run_simulation(&mut engine, &mut skip)?;
    } else {
        let mut renderer = TerminalRenderer::stdout(&settings.display);
        run_simulation(&mut engine, &mut renderer)?;
    }
    let total_time = start_time.elapsed();

    let final_grid = engine.grid();
    if no_render {
        println!("{}", GridFormatter::format_grid_compact(final_grid));
    }
    println!("{}", ColorOutput::success(&format!(
        "Finished {} steps in {:.3}s, {} living cells",
        engine.step_counter(),
        total_time.as_secs_f64(),
        final_grid.living_count()
    )));

    if let Some(path) = &settings.output.final_state_file {
        let name = format!("step {}", engine.step_counter());
        save_grid_to_file(final_grid, path, settings.output.format, &name)
            .context("Failed to save final state")?;
        println!("{}", ColorOutput::info(&format!("Final state saved to {}", path.display())));
    }

    Ok(())
}

fn patterns_command(config_path: PathBuf, pattern_dir: Option<PathBuf>) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    if let Some(directory) = pattern_dir {
        settings.patterns.directory = directory;
    }

    let library = PatternLibrary::scan(&settings.patterns.directory)
        .with_context(|| format!("Failed to scan {}", settings.patterns.directory.display()))?;

    if library.is_empty() {
        println!("{}", ColorOutput::warning("No patterns found"));
        return Ok(());
    }

    println!("{}", ColorOutput::info(&format!(
        "{} pattern(s) in {}:", library.len(), settings.patterns.directory.display()
    )));
    for name in library.names() {
        match library.load(name) {
            Some(Ok(pattern)) => {
                let (rows, cols) = pattern.size();
                println!("  {:<24} {}x{}", name, rows, cols);
            }
            Some(Err(e)) => println!("  {:<24} {}", name, ColorOutput::error(&e.to_string())),
            None => {}
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    let pattern_dir = directory.join("patterns");

    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let written = write_builtin_patterns(&pattern_dir, force)
        .context("Failed to create pattern files")?;
    println!("Created {} pattern file(s) in: {}", written.len(), pattern_dir.display());

    let examples_dir = directory.join("config/examples");

    // Random origins reach two thirds of the width; the 36-wide Gosper gun must still fit
    let mut mixed = Settings::default();
    mixed.simulation.cols = 110;
    mixed.simulation.seed = Some(life_sim::config::SeedConfig {
        pattern: "mixed pattern".to_string(),
        args: vec![6],
    });
    mixed.to_file(&examples_dir.join("mixed.yaml"))?;

    let mut gun = Settings::default();
    gun.simulation.rows = 40;
    gun.simulation.cols = 60;
    gun.simulation.seed = Some(life_sim::config::SeedConfig {
        pattern: "Gosper glider gun".to_string(),
        args: vec![5, 2],
    });
    gun.display.refresh_interval_ms = 100;
    gun.to_file(&examples_dir.join("gosper.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Add your own pattern files to {}", pattern_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
