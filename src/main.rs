use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use scrabble15::format;
use scrabble15::lexicon::Lexicon;
use scrabble15::search::{SearchStatus, Searcher};
use scrabble15::signature::SignatureIndex;

/// Finds sets of six fifteen letter words that fit on a scrabble board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the raw dictionary (one word per line)
    #[arg(short, long, default_value = "wordlists/enable1.txt")]
    dictionary: PathBuf,

    /// Path to the word/anchor pairs file; rebuilt from the dictionary
    /// when absent
    #[arg(short, long, default_value = "wordlists/scrabble15.words")]
    pairs: PathBuf,

    /// Write solution blocks here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write solutions as JSON placement records (for the board
    /// animation tool)
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// Number of worker threads (defaults to all cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let t_load = Instant::now();
    let lexicon = Lexicon::load_or_build(&cli.dictionary, &cli.pairs)?;
    log::info!(
        "{} anchored fifteen-letter words in {:.3}s",
        lexicon.len(),
        t_load.elapsed().as_secs_f64()
    );

    let index = SignatureIndex::build(&lexicon);
    log::info!("{} distinct signatures", index.len());

    let t_search = Instant::now();
    let outcome = Searcher::new(&index).run();
    log::info!(
        "searched {} outer signatures in {:.3}s",
        outcome.outer_total,
        t_search.elapsed().as_secs_f64()
    );
    if outcome.status == SearchStatus::Cancelled {
        log::warn!("search was cancelled; results are partial");
    }

    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            format::write_solutions(&mut out, &outcome.solutions, &lexicon)?;
            out.flush()?;
            log::info!(
                "wrote {} solutions to {}",
                outcome.solutions.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            format::write_solutions(&mut stdout.lock(), &outcome.solutions, &lexicon)?;
        }
    }

    if let Some(path) = &cli.json {
        let mut out = BufWriter::new(File::create(path)?);
        format::write_json(&mut out, &outcome.solutions, &lexicon)?;
        out.flush()?;
        log::info!("wrote placement records to {}", path.display());
    }

    Ok(())
}
