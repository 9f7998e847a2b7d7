//! Robot panels CLI - Read a problem from stdin, search, print the best board.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::io::{self, Read, Write};

use robot_panels::{
    compute::{Engine, search::SearchDriver},
    schema::{Board, Problem, SearchConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.json] < input.txt", args[0]);
        eprintln!();
        eprintln!("Search a panel layout for the robots described on stdin.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to search configuration file (optional)");
        eprintln!();
        eprintln!("Print the default configuration with --example.");
        return;
    }

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    // Load configuration
    let config = match args.get(1) {
        Some(path) => SearchConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => SearchConfig::default(),
    };

    // Load problem
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    }

    let problem = Problem::parse(&input).unwrap_or_else(|e| {
        eprintln!("Error parsing input: {}", e);
        std::process::exit(1);
    });
    let side = problem.board_side(config.border).unwrap_or_else(|e| {
        eprintln!("Error parsing input: {}", e);
        std::process::exit(1);
    });

    log::info!(
        "{} robots, {} instructions each, {}x{} searchable board",
        problem.agent_count(),
        problem.program_length,
        side,
        side
    );

    // Evaluate the empty board, then search
    let border = config.border;
    let engine = Engine::new(Board::new(side), problem.programs.into(), config.rewards);
    let mut driver = SearchDriver::new(config, engine);
    let result = driver.run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = out
        .write_all(result.board.render(border).as_bytes())
        .and_then(|_| out.flush())
    {
        eprintln!("Error writing board: {}", e);
        std::process::exit(1);
    }

    let stats = &result.stats;
    eprintln!("Score: {} (initial {})", stats.best_score, stats.initial_score);
    eprintln!(
        "Time: {:.3}s ({} iterations, {:.0} iterations/s, {} accepted, {} improvements)",
        stats.elapsed_seconds,
        stats.iterations,
        stats.iterations_per_second,
        stats.accepted,
        stats.improvements
    );
}

fn print_example_config() {
    let config = SearchConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
