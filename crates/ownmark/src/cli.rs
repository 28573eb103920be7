//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ownmark")]
#[command(about = "Takes a file containing node names and marks them as owned in the specified Neo4j database")]
pub struct Cli {
    /// Path to file containing list of node names. Lines starting with "#" are skipped.
    pub nodes_list: PathBuf,

    /// Neo4j bolt URI [default: bolt://localhost:7687].
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Neo4j user [default: neo4j].
    #[arg(short, long)]
    pub user: Option<String>,

    /// Neo4j password [default: neo4j1].
    #[arg(short, long)]
    pub password: Option<String>,

    /// Node names per statement [default: 500].
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Config file prefix (default: ownmark).
    #[arg(short, long, default_value = "ownmark")]
    pub config: String,
}
