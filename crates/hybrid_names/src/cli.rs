use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The directory containing JMnedict.xml, Names_2010Census.csv and the given name cache.
    #[arg(
        short,
        long,
        env = "HYBRID_NAMES_DATA_DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints randomly generated hybrid names.
    Generate {
        /// How many names to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seeds the random number generator to get reproducible output.
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Always parses the dictionary instead of using or writing the given name cache.
        #[arg(long)]
        no_cache: bool,
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Parses the dictionary, writes the given name cache and reports the pool sizes.
    Prepare {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// The minimum length of a romanized given name.
    #[arg(long, default_value_t = 2)]
    pub min_len: usize,
    /// The maximum length of a romanized given name.
    #[arg(long, default_value_t = 14)]
    pub max_len: usize,
}

#[derive(Args)]
pub struct SourceArgs {
    /// How many times to look for missing source files again before giving up.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
    /// Seconds to wait between attempts.
    #[arg(long, default_value_t = 2)]
    pub retry_delay: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    /// `Tarou Smith`
    Text,
    /// `tarou-smith`
    Slug,
    /// One JSON object per line.
    Json,
}
