//! Passforge CLI
//!
//! Command-line surface over the generation and classification
//! library. The generated password is the only thing written to
//! stdout; diagnostics and strength output go to stderr so the
//! password stays pipeable.

use clap::{Parser, Subcommand};
use passforge::{
    classify, score, CharacterClass, ClassSet, FileConfig, GenerationRequest, PasswordGenerator,
};
use std::path::PathBuf;

/// passforge - Secure password generation with guaranteed class coverage.
///
/// Generates passwords from a cryptographically secure random source and
/// classifies password strength with a fixed structural heuristic.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(arg_required_else_help(true))]
#[command(propagate_version = true)]
struct CliArgs {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a password.
    ///
    /// Class flags select which character classes to include; with no class flag, the configured defaults apply (all four classes).
    Generate(GenerateArgs),

    /// Classify the strength of an existing password.
    Classify(ClassifyArgs),
}

/// Arguments specific to the `generate` subcommand.
#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Password length (default from config, 16 out of the box).
    #[clap(short, long)]
    length: Option<usize>,

    /// Include ASCII uppercase letters (A-Z).
    #[clap(long)]
    uppercase: bool,

    /// Include ASCII lowercase letters (a-z).
    #[clap(long)]
    lowercase: bool,

    /// Include ASCII digits (0-9).
    #[clap(long)]
    digits: bool,

    /// Include punctuation symbols.
    #[clap(long)]
    symbols: bool,

    /// Path to a TOML file with generation defaults.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Report the strength of the generated password on stderr.
    #[clap(long)]
    show_strength: bool,
}

/// Arguments specific to the `classify` subcommand.
#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// The password to classify.
    password: String,
}

fn main() {
    // Initialize logging; stderr keeps stdout clean for the password.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    match args.command {
        Command::Generate(args) => run_generate(args),
        Command::Classify(args) => run_classify(args),
    }
}

fn run_generate(args: GenerateArgs) {
    let defaults = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config.defaults,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Default::default(),
    };

    let length = args.length.unwrap_or(defaults.length);
    let classes = selected_classes(&args).unwrap_or_else(|| defaults.classes());

    let request = match GenerationRequest::new(length, classes) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            std::process::exit(1);
        }
    };

    let mut generator = PasswordGenerator::new();
    let password = match generator.generate(&request) {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", password.as_str());

    if args.show_strength {
        eprintln!(
            "strength: {} (score {}/6)",
            classify(password.as_str()),
            score(password.as_str())
        );
    }
}

fn run_classify(args: ClassifyArgs) {
    println!(
        "{} (score {}/6)",
        classify(&args.password),
        score(&args.password)
    );
}

/// Returns the class set named by the include flags, or `None` when no
/// flag was given so the configured defaults take over.
fn selected_classes(args: &GenerateArgs) -> Option<ClassSet> {
    let mut classes = ClassSet::EMPTY;
    if args.uppercase {
        classes.insert(CharacterClass::Uppercase);
    }
    if args.lowercase {
        classes.insert(CharacterClass::Lowercase);
    }
    if args.digits {
        classes.insert(CharacterClass::Digit);
    }
    if args.symbols {
        classes.insert(CharacterClass::Symbol);
    }

    if classes.is_empty() {
        None
    } else {
        Some(classes)
    }
}
