use clap::Parser;
use smeltcalc::prelude::*;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Works out the raw materials needed to craft refined items at the smelter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The refined material to craft (e.g. "Steel")
    item: Option<String>,

    /// Your smelter level (9 or 10)
    #[arg(short, long)]
    level: Option<u8>,

    /// Quantity per batch
    #[arg(short, long, default_value_t = 1)]
    quantity: u64,

    /// Number of batches
    #[arg(short, long, default_value_t = 1)]
    batches: u64,

    /// Print the plan as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// List the craftable items and their recipes, then exit
    #[arg(long)]
    list: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::survival_island();
    debug!(recipes = catalog.len(), "catalog loaded");

    if cli.list {
        print!("{}", PlanFormatter::format_catalog(&catalog));
        return;
    }

    let json = cli.json;
    let request = if cli.human {
        run_interactive(&catalog)
    } else {
        run_non_interactive(cli, &catalog)
    };

    run_plan(&catalog, &request, json);
}

fn run_plan(catalog: &Catalog, request: &CraftRequest, json: bool) {
    let plan = Planner::new(catalog)
        .plan(request)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    info!(materials = plan.materials.len(), "plan ready");

    if json {
        let rendered = plan
            .to_json_pretty()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize plan: {}", e)));
        println!("{}", rendered);
    } else {
        println!();
        print!("{}", PlanFormatter::format_plan(&plan));
    }
}

/// Builds the request from command line arguments alone.
fn run_non_interactive(cli: Cli, catalog: &Catalog) -> CraftRequest {
    let level = cli.level.unwrap_or_else(|| {
        exit_with_error("Please select your smelter level with --level (9 or 10).")
    });
    let smelter_level =
        SmelterLevel::from_level(level).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let item_arg = cli.item.unwrap_or_else(|| {
        exit_with_error("An item is required in non-interactive mode. Use --list to see them.")
    });
    let item = resolve_item(catalog, &item_arg)
        .unwrap_or_else(|| exit_with_error(&format!("'{}' is not a craftable item", item_arg)));

    CraftRequest {
        item,
        quantity: cli.quantity,
        batch_size: cli.batches,
        smelter_level,
    }
}

/// Prompts for every input, re-asking until each one is valid.
fn run_interactive(catalog: &Catalog) -> CraftRequest {
    println!("--- Survival Island Resource Calculator ---");

    let smelter_level = loop {
        let levels = SmelterLevel::all()
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("/");
        let choice = prompt_for_input(&format!("Smelter level ({})", levels), None);
        match choice.parse::<u8>().map(SmelterLevel::from_level) {
            Ok(Ok(level)) => break level,
            _ => println!("Please select your smelter level."),
        }
    };

    println!("\nRefined materials:");
    for (i, name) in catalog.item_names().iter().enumerate() {
        println!("  {}: {}", i + 1, name);
    }
    let item = loop {
        let choice = prompt_for_input("Select refined material", Some("1"));
        let by_index = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| catalog.item_names().get(n).map(|s| s.to_string()));
        match by_index.or_else(|| resolve_item(catalog, &choice)) {
            Some(item) => break item,
            None => println!("Invalid choice. Enter a number from the list or an item name."),
        }
    };

    let limit = smelter_level.max_quantity();
    let quantity = loop {
        let choice = prompt_for_input(&format!("Quantity per batch (1-{})", limit), Some("1"));
        match choice.parse::<u64>() {
            Ok(n) if (1..=limit).contains(&n) => break n,
            _ => println!("Please enter a number between 1 and {}.", limit),
        }
    };

    let batch_size = loop {
        let choice = prompt_for_input("Batch size", Some("1"));
        match choice.parse::<u64>() {
            Ok(n) if n >= 1 => break n,
            _ => println!("Please enter a number of at least 1."),
        }
    };

    CraftRequest {
        item,
        quantity,
        batch_size,
        smelter_level,
    }
}

/// Matches `name` against the catalog, ignoring case.
fn resolve_item(catalog: &Catalog, name: &str) -> Option<String> {
    catalog
        .item_names()
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
        .map(str::to_string)
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => exit_with_error("Input closed before all values were entered."),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
