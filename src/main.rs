//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, OutputFormat, PatternKind, Settings, MIN_GRID_SIZE},
    game_of_life::{self, Grid, PatternLibrary, PlacementOutOfBounds, TransitionEngine},
    utils::{ColorOutput, GridRenderer, CLEAR_SCREEN},
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Initial pattern (prompted for when omitted and no config exists)
        #[arg(short, long, value_enum)]
        pattern: Option<PatternKind>,

        /// Grid side length, must be greater than 3
        #[arg(short, long)]
        size: Option<usize>,

        /// Anchor row for the glider and glider gun patterns
        #[arg(short, long)]
        row: Option<usize>,

        /// Anchor column for the glider and glider gun patterns
        #[arg(long)]
        column: Option<usize>,

        /// Number of generations to simulate
        #[arg(short, long)]
        generations: Option<usize>,

        /// RNG seed for reproducible random fills
        #[arg(long)]
        seed: Option<u64>,

        /// Delay between frames in milliseconds
        #[arg(short, long)]
        delay: Option<u64>,

        /// Custom layout file (for --pattern custom)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Save every generation to this directory
        #[arg(long)]
        snapshot_dir: Option<PathBuf>,

        /// Print the configuration before running
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a default configuration and example input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Load a stored layout and print it
    Show {
        /// Layout file to display
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            size,
            row,
            column,
            generations,
            seed,
            delay,
            input,
            snapshot_dir,
            verbose,
        } => {
            let overrides = CliOverrides {
                pattern,
                grid_size: size,
                generations,
                row,
                column,
                seed,
                frame_delay_ms: delay,
                custom_layout_file: input,
                snapshot_directory: snapshot_dir,
            };
            run_command(config, overrides, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { file } => show_command(file),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let config_exists = config_path.exists();

    let mut settings = if config_exists {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    // Prompt like the interactive original when neither the CLI nor a config
    // file pinned down the game
    let interactive = !config_exists;
    if interactive && overrides.pattern.is_none() {
        settings.pattern.kind = prompt_pattern_kind()?;
    }
    let kind = overrides.pattern.unwrap_or(settings.pattern.kind);
    if interactive && overrides.grid_size.is_none() && kind != PatternKind::Custom {
        settings.simulation.grid_size = prompt_grid_size()?;
    }

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Pattern: {:?}", settings.pattern.kind);
        println!("  Grid size: {}", settings.simulation.grid_size);
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Frame delay: {}ms", settings.simulation.frame_delay_ms);
        if settings.output.save_snapshots {
            println!(
                "  Snapshots: {}",
                settings.output.snapshot_directory.display()
            );
        }
        println!();
    }

    let initial = build_initial_grid(&settings, &overrides, interactive)?;
    animate(&settings, initial)
}

/// Build the initial grid, re-prompting for anchors in interactive mode when
/// a placement is rejected
fn build_initial_grid(
    settings: &Settings,
    overrides: &CliOverrides,
    interactive: bool,
) -> Result<Grid> {
    let size = settings.simulation.grid_size;

    match settings.pattern.kind {
        PatternKind::Glider => place_pattern(settings, overrides, interactive, |r, c| {
            PatternLibrary::glider(size, r, c)
        }),
        PatternKind::GosperGliderGun => place_pattern(settings, overrides, interactive, |r, c| {
            PatternLibrary::gosper_glider_gun(size, r, c)
        }),
        _ => game_of_life_sim::initial_grid(settings),
    }
}

fn place_pattern(
    settings: &Settings,
    overrides: &CliOverrides,
    interactive: bool,
    generate: impl Fn(usize, usize) -> Result<Grid, PlacementOutOfBounds>,
) -> Result<Grid> {
    let prompt_anchor = interactive && overrides.row.is_none() && overrides.column.is_none();

    let mut row = settings.pattern.row;
    let mut column = settings.pattern.column;

    loop {
        if prompt_anchor {
            row = prompt_number("Enter the row where the pattern should be placed: ")?;
            column = prompt_number("Enter the column where the pattern should be placed: ")?;
        }

        match generate(row, column) {
            Ok(grid) => return Ok(grid),
            Err(err) if prompt_anchor => {
                println!("{}", ColorOutput::warning(&err.to_string()));
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Render each generation to the terminal, optionally persisting snapshots
fn animate(settings: &Settings, initial: Grid) -> Result<()> {
    let delay = Duration::from_millis(settings.simulation.frame_delay_ms);
    let mut grid = initial;

    save_snapshot_if_enabled(settings, &grid, 0)?;
    print!("{}{}", CLEAR_SCREEN, GridRenderer::format_frame(&grid, 0));
    std::io::stdout().flush().ok();

    for generation in 1..=settings.simulation.generations {
        std::thread::sleep(delay);
        grid = TransitionEngine::next_generation(&grid);

        save_snapshot_if_enabled(settings, &grid, generation)?;
        print!(
            "{}{}",
            CLEAR_SCREEN,
            GridRenderer::format_frame(&grid, generation)
        );
        std::io::stdout().flush().ok();
    }

    println!(
        "\n{}",
        ColorOutput::success(&format!(
            "Simulated {} generation(s), {} cell(s) still alive",
            settings.simulation.generations,
            grid.living_count()
        ))
    );

    Ok(())
}

fn save_snapshot_if_enabled(settings: &Settings, grid: &Grid, generation: usize) -> Result<()> {
    if !settings.output.save_snapshots {
        return Ok(());
    }

    let dir = &settings.output.snapshot_directory;
    match settings.output.format {
        OutputFormat::Text => {
            let path = dir.join(format!("generation_{:04}.csv", generation));
            game_of_life::save_snapshot(grid, path)
        }
        OutputFormat::Json => {
            let path = dir.join(format!("generation_{:04}.json", generation));
            game_of_life::io::save_snapshot_json(grid, path)
        }
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let data_dir = directory.join("data");
    let output_dir = directory.join("output/snapshots");

    for dir in [&config_dir, &data_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let layout_path = data_dir.join("custom_input.csv");
    if !layout_path.exists() || force {
        game_of_life::io::create_example_layout(&layout_path)
            .context("Failed to create example layout")?;
        println!("Created: {}", layout_path.display());
    } else {
        println!("Skipped: {} (already exists)", layout_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {} if needed", config_path.display());
    println!("2. Run: cargo run -- run --pattern glider --size 20 --row 0 --column 0");

    Ok(())
}

fn show_command(file: PathBuf) -> Result<()> {
    let grid = game_of_life::load_custom_layout(&file)
        .with_context(|| format!("Failed to load layout from {}", file.display()))?;

    println!("Layout {} ({}x{}):", file.display(), grid.size, grid.size);
    println!("{}", GridRenderer::format_grid_with_coords(&grid));

    println!("Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!(
        "  Density: {:.1}%",
        (grid.living_count() as f64 / (grid.size * grid.size) as f64) * 100.0
    );

    Ok(())
}

fn prompt_pattern_kind() -> Result<PatternKind> {
    loop {
        let answer = prompt_line(
            "Enter 'R' for a random game, 'G' for a glider, 'GG' for a glider gun, or 'C' for a custom game: ",
        )?;

        match answer.trim().to_uppercase().as_str() {
            "R" => return Ok(PatternKind::Random),
            "G" => return Ok(PatternKind::Glider),
            "GG" => return Ok(PatternKind::GosperGliderGun),
            "C" => return Ok(PatternKind::Custom),
            other => println!(
                "{}",
                ColorOutput::warning(&format!("{} is an invalid game type.", other))
            ),
        }
    }
}

fn prompt_grid_size() -> Result<usize> {
    loop {
        let size: usize =
            prompt_number("Enter an integer greater than 3 to specify the grid size: ")?;
        if size >= MIN_GRID_SIZE {
            return Ok(size);
        }
        println!(
            "{}",
            ColorOutput::warning(&format!("{} is not greater than 3.", size))
        );
    }
}

fn prompt_number(message: &str) -> Result<usize> {
    loop {
        let answer = prompt_line(message)?;
        match answer.trim().parse::<usize>() {
            Ok(value) => return Ok(value),
            Err(_) => println!(
                "{}",
                ColorOutput::warning(&format!("{} is not a valid number.", answer.trim()))
            ),
        }
    }
}

fn prompt_line(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}
