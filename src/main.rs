// src/main.rs
use clap::Parser;
use std::path::PathBuf;
use varopts::storage::StorageManager;
use varopts::utils::{self, AppError};
use varopts::variable::{models::QueryVariable, update_variable_options};
use varopts::VariableSort;

/// Resolve "metric find" query results into query variable options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Extraction pattern, e.g. `/region-(.*)/` or `text/^web/`
    #[arg(short, long, env = "VAROPTS_REGEX", default_value = "")]
    regex: String,

    /// Sort code: 0 disabled, 1/2 alphabetical, 3/4 numerical, 5/6 case-insensitive (even = descending)
    #[arg(short, long, env = "VAROPTS_SORT", default_value_t = 0)]
    sort: u32,

    /// Prepend the "All" option
    #[arg(long)]
    include_all: bool,

    /// Variable name, used in log output
    #[arg(short, long, default_value = "query")]
    name: String,

    /// JSON file with the raw items (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the options JSON (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// More log output on stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (RUST_LOG overrides -v)
    utils::logging::setup_logging(args.verbose);
    tracing::info!("Starting resolution for args: {:?}", args);

    if args.input.is_some() && args.input == args.output {
        return Err(AppError::Config("Input and output must be different files".to_string()));
    }

    // 3. Load raw items
    let storage = StorageManager::new(args.input.clone(), args.output.clone(), args.pretty);
    let results = storage.load_raw_items()?;
    tracing::info!("Loaded {} raw items", results.len());

    // 4. Resolve options
    let mut variable = QueryVariable {
        name: args.name,
        regex: args.regex,
        sort: VariableSort(args.sort),
        include_all: args.include_all,
        options: Vec::new(),
    };
    let pattern = variable.regex.clone();
    update_variable_options(&mut variable, &results, &pattern)?;
    tracing::info!("Resolved {} options for variable '{}'", variable.options.len(), variable.name);

    // 5. Write options
    storage.save_options(&variable.options)?;

    Ok(())
}
