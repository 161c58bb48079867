//! Prints hybrid names made of a Japanese given name and a Western surname.

mod cli;

use clap::Parser;
use cli::{Cli, Command, FilterArgs, Format, SourceArgs};
use eyre::WrapErr;
use hybrid_names::{
    acquire::{LocalSources, Retry, SourceAcquirer, SourcePaths},
    extract_surnames, generate_hybrid_name,
    pool_cache::{self, CACHE_FILE},
    GivenNamePool, NameFilter,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            count,
            seed,
            format,
            no_cache,
            filter,
            sources,
        } => {
            generate(&cli.data_dir, &filter, &sources, count, seed, format, !no_cache)?;
        }
        Command::Prepare { filter, sources } => {
            prepare(&cli.data_dir, &filter, &sources)?;
        }
    }

    Ok(())
}

fn generate(
    data_dir: &Path,
    filter: &FilterArgs,
    sources: &SourceArgs,
    count: usize,
    seed: Option<u64>,
    format: Format,
    use_cache: bool,
) -> eyre::Result<()> {
    let paths = acquire(data_dir, sources)?;
    let filter = name_filter(filter);
    let given_pool = load_given_names(data_dir, &paths.dictionary, &filter, use_cache)?;
    let surname_pool = extract_surnames(&paths.surnames)
        .wrap_err_with(|| format!("Failed to build surnames from '{}'", paths.surnames.display()))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!("generating {count} names");
    let mut out = BufWriter::new(std::io::stdout().lock());
    for _ in 0..count {
        let name = generate_hybrid_name(&given_pool, &surname_pool, &mut rng);
        match format {
            Format::Text => writeln!(out, "{name}")?,
            Format::Slug => writeln!(out, "{}", name.slug())?,
            Format::Json => {
                serde_json::to_writer(&mut out, &name)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn prepare(data_dir: &Path, filter: &FilterArgs, sources: &SourceArgs) -> eyre::Result<()> {
    let paths = acquire(data_dir, sources)?;
    let filter = name_filter(filter);
    let given_pool = load_given_names(data_dir, &paths.dictionary, &filter, false)?;
    pool_cache::save(&data_dir.join(CACHE_FILE), &given_pool)?;
    let surname_pool = extract_surnames(&paths.surnames)
        .wrap_err_with(|| format!("Failed to build surnames from '{}'", paths.surnames.display()))?;
    println!(
        "{} given names, {} surnames",
        given_pool.as_slice().len(),
        surname_pool.as_slice().len()
    );
    Ok(())
}

fn acquire(data_dir: &Path, sources: &SourceArgs) -> eyre::Result<SourcePaths> {
    let acquirer = Retry::new(
        LocalSources::default(),
        sources.retries,
        Duration::from_secs(sources.retry_delay),
    );
    acquirer
        .ensure_sources(data_dir)
        .wrap_err_with(|| format!("Failed to find source files in '{}'", data_dir.display()))
}

fn name_filter(args: &FilterArgs) -> NameFilter {
    NameFilter {
        min_len: args.min_len,
        max_len: args.max_len,
    }
}

fn load_given_names(
    data_dir: &Path,
    dictionary: &Path,
    filter: &NameFilter,
    use_cache: bool,
) -> eyre::Result<GivenNamePool> {
    pool_cache::load_or_extract(&data_dir.join(CACHE_FILE), dictionary, filter, use_cache)
        .wrap_err_with(|| format!("Failed to build given names from '{}'", dictionary.display()))
}
