use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bytepiece::corpus::{read_corpus, DEFAULT_MAX_BYTES};
use bytepiece::printer::DEFAULT_WIDTH_CAP;
use bytepiece::{
    best_by_compression_gain, compression_gain, ByteKey, EntryPrinter, PrinterConfig,
    TrainReport, TrainerConfig, Trie, UnigramTrainer,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Byte-level substring frequency counter", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count every substring of a corpus and print the table
    Count(CountArgs),
    /// Print the substring with the highest compression gain
    Best(CorpusArgs),
}

#[derive(Args, Debug)]
struct CorpusArgs {
    /// Corpus file to read
    path: PathBuf,

    /// Maximum number of bytes read from the corpus
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: usize,

    /// Count substrings within chunks of this many bytes
    #[arg(long, value_name = "BYTES")]
    chunk: Option<usize>,
}

#[derive(Args, Debug)]
struct CountArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Only print the K most frequent substrings
    #[arg(long, value_name = "K")]
    top: Option<usize>,

    /// Only print substrings seen at least this many times
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    min_count: u64,

    /// Key bytes shown per line before truncating
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_WIDTH_CAP)]
    width: usize,
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn train(args: &CorpusArgs) -> Result<(Trie, TrainReport)> {
    let data = read_corpus(&args.path, args.max_bytes)
        .with_context(|| format!("loading corpus {:?}", args.path))?;
    if data.is_empty() {
        warn!("corpus {:?} is empty", args.path);
    }

    let trainer = UnigramTrainer::new(TrainerConfig {
        chunk_length: args.chunk,
        ..TrainerConfig::default()
    })?;
    let mut trie = Trie::new();
    let report = trainer
        .train(&mut trie, &data)
        .context("counting substrings")?;
    Ok((trie, report))
}

fn run_count(args: CountArgs) -> Result<()> {
    let printer = EntryPrinter::new(PrinterConfig { width_cap: args.width })?;
    let (trie, report) = train(&args.corpus)?;

    let mut entries: Vec<(ByteKey<'static>, u64)> = trie
        .entries()
        .filter(|(_, count)| *count >= args.min_count)
        .collect();
    if let Some(top) = args.top {
        // Stable sort keeps lexicographic order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(top);
    }

    let stdout = io::stdout();
    let lines = printer.write_entries(stdout.lock(), entries)?;
    let stats = trie.stats();
    info!(
        "{} of {} keys printed; {} substrings, {} nodes, max depth {}, ~{} KiB",
        lines,
        trie.len(),
        report.substrings,
        stats.node_count,
        stats.max_depth,
        stats.approx_bytes / 1024
    );
    Ok(())
}

fn run_best(args: CorpusArgs) -> Result<()> {
    let (trie, _) = train(&args)?;
    let printer = EntryPrinter::default();
    let mut stdout = io::stdout().lock();
    match best_by_compression_gain(&trie) {
        Some((key, count)) => {
            writeln!(
                stdout,
                "{}\tcount={}\tgain={}",
                printer.format_key(&key),
                count,
                compression_gain(key.len(), count)
            )?;
        }
        None => warn!("no substrings to choose from"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Count(args) => run_count(args),
        Commands::Best(args) => run_best(args),
    }
}
