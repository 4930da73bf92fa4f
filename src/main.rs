//! Diceware Passphrase Generator CLI
//!
//! Generates passphrases interactively, rolling dice either from key
//! press timing or from a secure random generator.

use clap::Parser;
use diceware_roller::{
    analysis,
    config::FileConfig,
    entropy::{self, EntropyStrategy, SecureRandom},
    passphrase::{generate, generate_with_progress},
    terminal::{RawModeGuard, Renderer, TerminalKeys},
    GeneratorConfig, WordLookup, WordlistProvider,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "diceware")]
#[command(about = "Generates passphrases using the Diceware method.")]
#[command(version = diceware_roller::VERSION)]
struct Cli {
    /// The number of words in the passphrase to generate [default: 5]
    #[arg(short = 'n', long = "num-words", visible_alias = "num_words", allow_negative_numbers = true)]
    num_words: Option<i64>,

    /// Use the OS-seeded CSPRNG instead of keystroke timing
    #[arg(long)]
    urandom: bool,

    /// The wordlist to use: eff (default, most usable), diceware or beale.
    /// All provide the same level of security.
    #[arg(long)]
    wordlist: Option<String>,

    /// Directory holding the wordlist files
    #[arg(long, value_name = "DIR")]
    wordlist_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Audit the secure source over ROLLS rolls instead of generating
    #[arg(long, value_name = "ROLLS")]
    audit: Option<u64>,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the raw-mode display
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_interrupt() => {
            eprintln!();
            ExitCode::from(130)
        }
        Err(e) => {
            eprintln!("diceware: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> diceware_roller::Result<()> {
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut config = file.generator.clone();
    if let Some(requested) = cli.num_words {
        config = config.with_num_words(requested)?;
    }
    if cli.urandom {
        config.entropy = EntropyStrategy::SecureRandom;
    }
    if let Some(name) = &cli.wordlist {
        config.wordlist = name.parse()?;
    }
    config.validate()?;

    if let Some(rolls) = cli.audit {
        return run_audit(rolls);
    }

    let mut wordlists = file.wordlists;
    if let Some(directory) = cli.wordlist_dir {
        wordlists.directory = directory;
    }
    let provider = WordlistProvider::from_config(&wordlists)?;
    let lookup = provider.load(config.wordlist)?;

    info!(
        "Diceware v{} ({} words, {}, {} wordlist)",
        diceware_roller::VERSION,
        config.num_words,
        config.entropy,
        config.wordlist
    );

    let _raw = RawModeGuard::enable()?;
    run_interactive(&config, &lookup)
}

fn run_interactive(config: &GeneratorConfig, lookup: &WordLookup) -> diceware_roller::Result<()> {
    let mut renderer = Renderer::new(io::stdout());
    let mut keys = TerminalKeys::new();
    let mut source = entropy::from_strategy(config.entropy);
    let num_words = config.num_words as usize;

    if config.entropy.is_interactive() {
        renderer.keystroke_notice()?;
    }

    loop {
        let passphrase = if config.entropy.is_interactive() {
            renderer.begin_countdown()?;
            let passphrase = generate_with_progress(num_words, lookup, &mut source, &mut renderer)?;
            renderer.end_countdown()?;
            passphrase
        } else {
            generate(num_words, lookup, &mut source)?
        };

        renderer.show_passphrase(&passphrase, config.entropy)?;

        if !renderer.prompt_again(|| keys.next_char())? {
            break;
        }
    }

    Ok(())
}

fn run_audit(rolls: u64) -> diceware_roller::Result<()> {
    let mut source = SecureRandom::from_os_entropy();
    let histogram = analysis::audit(&mut source, rolls)?;

    println!("Audited {} secure-random rolls", histogram.total());
    for (face, count) in (1..).zip(histogram.counts()) {
        println!("  {}: {}", face, count);
    }
    println!("chi-square: {:.3}", histogram.chi_square());
    match histogram.p_value() {
        Some(p) => println!("p-value: {:.4} ({})", p, verdict(histogram.looks_uniform(0.01))),
        None => println!("p-value: n/a (no rolls)"),
    }

    Ok(())
}

fn verdict(uniform: bool) -> &'static str {
    if uniform {
        "consistent with a fair die"
    } else {
        "uniformity rejected at 1%"
    }
}
