use crate::suite::Check;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON file with the node list and chain constants
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,
    /// Node host to check instead of the ones listed in the config (repeatable)
    #[arg(short, long)]
    pub node: Vec<String>,
    /// Run only the named checks (repeatable)
    #[arg(long, value_enum)]
    pub check: Vec<Check>,
    /// Print the available checks and exit
    #[arg(short, long)]
    pub list: bool,
}
