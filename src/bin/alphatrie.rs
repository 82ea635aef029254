use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use alphatrie::{Correction, Trie};
use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{Level, info, warn};

/// Load a word list into a letter trie and run wildcard, autocomplete and
/// autocorrect queries against it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File with one key per line
    #[arg(name = "KEYS")]
    keys: PathBuf,

    /// Wildcard pattern, `*` matches exactly one letter
    #[arg(long, default_value = "y*u*s*l*")]
    pattern: String,

    /// Prefix to autocomplete
    #[arg(long, default_value = "you")]
    prefix: String,

    /// Key to autocorrect
    #[arg(long, default_value = "yoru")]
    correct: String,

    /// Suggestion strategy for autocorrect
    #[arg(long, value_enum, default_value_t = CorrectionArg::Substitution)]
    correction: CorrectionArg,

    /// Seed for the random values, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Skip printing every stored key before the query results
    #[arg(long)]
    no_print: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CorrectionArg {
    Substitution,
    PrefixWalk,
}

impl From<CorrectionArg> for Correction {
    fn from(arg: CorrectionArg) -> Self {
        match arg {
            CorrectionArg::Substitution => Correction::Substitution,
            CorrectionArg::PrefixWalk => Correction::PrefixWalk,
        }
    }
}

fn load_keys(cli: &Cli, trie: &mut Trie<u32>) -> anyhow::Result<()> {
    let file = File::open(&cli.keys)
        .with_context(|| format!("failed to open key file {}", cli.keys.display()))?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (mut inserted, mut duplicates, mut skipped) = (0usize, 0usize, 0usize);
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        let key = line.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }

        match trie.insert(&key, rng.gen_range(1..500)) {
            Ok(true) => inserted += 1,
            Ok(false) => duplicates += 1,
            Err(err) => {
                warn!(line = line_no + 1, %err, "skipping key");
                skipped += 1;
            }
        }
    }

    info!(inserted, duplicates, skipped, "loaded keys");
    Ok(())
}

fn print_section(out: &mut impl Write, title: &str, keys: &[String]) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    for key in keys {
        writeln!(out, "{key}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut trie = Trie::new();
    load_keys(&cli, &mut trie)?;

    let matches = trie
        .partial_match(&cli.pattern)
        .context("invalid --pattern")?;
    let completions = trie.autocomplete(&cli.prefix).context("invalid --prefix")?;
    let corrections = trie
        .autocorrect_with(&cli.correct, cli.correction.into())
        .context("invalid --correct")?;

    let mut out = BufWriter::new(io::stdout().lock());
    if !cli.no_print {
        for (key, value, count) in trie.iter() {
            writeln!(out, "{key} {value} {count}")?;
        }
    }
    print_section(&mut out, "keys matching the pattern", &matches)?;
    print_section(&mut out, "keys with the prefix", &completions)?;
    print_section(&mut out, "suggested corrections", &corrections)?;
    out.flush()?;

    Ok(())
}
