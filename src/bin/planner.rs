use clap::Parser;
use gridsweep::search::{
    heuristics::HeuristicName, plan, validate, Action, GridSnapshot, PlannerConfig,
    SearchEngineName, SearchResult,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Plan cleaning routes for a vacuum agent on a grid map.
///
/// The map file uses `#` for walls, `*` for dirty cells, `@` for the agent
/// and `.` for empty cells; the outer ring must be wall. Planning is staged:
/// each leg targets the next reachable dirty cell, the cell is cleaned, and
/// planning repeats on the updated grid until nothing is dirty.
struct Cli {
    #[arg(help = "The grid map file")]
    map: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        default_value_t = SearchEngineName::AStar
    )]
    engine: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        default_value_t = HeuristicName::Manhattan
    )]
    heuristic: HeuristicName,
    #[arg(
        help = "Price rotation between successive moves",
        short = 't',
        long = "turn-cost"
    )]
    turn_cost: bool,
    #[arg(
        value_enum,
        help = "The agent's initial heading, prices the first move of a leg",
        long = "heading"
    )]
    heading: Option<Action>,
    #[arg(
        help = "Wall-clock limit per leg, e.g. 30s",
        long = "time-limit",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(help = "Memory limit per leg in megabytes", long = "memory-limit-mb")]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Write the full action sequence to this file",
        short = 'o',
        long = "output"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let text = std::fs::read_to_string(&cli.map).expect("Failed to read map file, does it exist?");
    let mut grid = match GridSnapshot::from_text(&text) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Could not load map: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(heading) = cli.heading {
        grid = grid.with_heading(heading);
    }

    let config = PlannerConfig {
        engine: cli.engine,
        heuristic: cli.heuristic,
        turn_cost_enabled: cli.turn_cost,
        time_limit: cli.time_limit,
        memory_limit_mb: cli.memory_limit_mb,
    };

    let mut legs = 0usize;
    let mut all_steps: Vec<Action> = vec![];
    let mut total_cost = 0.0;
    while grid.dirty_count() > 0 {
        let (result, _statistics) = match plan(&grid, &config) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Planning failed: {}", e);
                std::process::exit(1);
            }
        };
        match result {
            SearchResult::Success(solution) => {
                let goal =
                    validate(&solution.plan, &grid).expect("engine returned an invalid plan");
                info!(
                    leg = legs,
                    plan_length = solution.plan.len(),
                    cost = solution.cost.0,
                    explored = solution.explored.len(),
                );
                if solution.plan.is_empty() {
                    println!("Leg {}: already on dirt at {}", legs, goal);
                } else {
                    println!(
                        "Leg {}: {} -> {} (cost {})",
                        legs, solution.plan, goal, solution.cost
                    );
                }
                total_cost += solution.cost.0;
                let heading = solution.plan.steps().last().copied().or(grid.heading());
                all_steps.extend(solution.plan.steps().iter().copied());
                grid = grid.cleaned(&goal).with_agent(goal, heading);
                legs += 1;
            }
            SearchResult::NoSolution { explored } => {
                println!(
                    "No path to any of the {} remaining dirty cells ({} states reachable)",
                    grid.dirty_count(),
                    explored.len()
                );
                break;
            }
            SearchResult::TimeLimitExceeded { .. } => {
                println!("Search hit its time limit, stopping");
                break;
            }
            SearchResult::MemoryLimitExceeded { .. } => {
                println!("Search hit its memory limit, stopping");
                break;
            }
        }
    }

    if grid.dirty_count() == 0 {
        println!(
            "Everything is clean: {} legs, {} moves, total cost {}",
            legs,
            all_steps.len(),
            total_cost
        );
    }

    if let Some(output) = cli.output {
        let lines: Vec<String> = all_steps.iter().map(Action::to_string).collect();
        std::fs::write(output, lines.join("\n")).expect("Failed to write plan file");
    }
}
