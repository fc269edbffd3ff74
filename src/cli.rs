use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Consolidate recipe ingredients into one shopping list", long_about = None)]
pub struct Cli {
    /// Path to the JSON snapshot of selected recipes and their ingredients
    #[arg(env = "GROCERY_INPUT")]
    pub input: PathBuf,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
