//! Texting CLI
//!
//! Usage:
//!   texting [OPTIONS] <TEMPLATE> [ARGS]...
//!
//! Options:
//!   -d, --dictionaries <FILE>  Dictionary file (TOML format)
//!   -k, --key                  Treat TEMPLATE as a dictionary key
//!   -f, --from <DICTIONARY>    Look the key up in this dictionary only
//!   -u, --use <DICTIONARY>     Select the active dictionary
//!   -p, --production           Production mode
//!   --diagnostics              Print a report for every diagnostic
//!   -h, --help                 Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;

use texting::{Diagnostic, Mode, Text, TextError};

#[derive(Parser)]
#[command(name = "texting")]
#[command(about = "Format templates with positional arguments, dictionaries and functions")]
struct Cli {
    /// Template to format, or a dictionary key with --key
    template: String,

    /// Positional arguments referenced as {0}, {1}, ...
    args: Vec<String>,

    /// Dictionary file (TOML format)
    #[arg(short, long)]
    dictionaries: Option<PathBuf>,

    /// Treat TEMPLATE as a dictionary key
    #[arg(short, long)]
    key: bool,

    /// Look the key up in this dictionary only (implies --key)
    #[arg(short, long, value_name = "DICTIONARY")]
    from: Option<String>,

    /// Select the active dictionary
    #[arg(short = 'u', long = "use", value_name = "DICTIONARY")]
    use_dictionary: Option<String>,

    /// Production mode: no warnings, missing keys render as nothing
    #[arg(short, long)]
    production: bool,

    /// Print a report for every diagnostic to stderr
    #[arg(long)]
    diagnostics: bool,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, TextError> {
    let mut text = Text::new();

    if let Some(path) = &cli.dictionaries {
        text.load_dictionaries_file(path)?;
    }
    if cli.production {
        text.set_mode(Mode::Production);
    }
    if let Some(key) = &cli.use_dictionary {
        if text.dictionary_by_key(key).is_none() {
            eprintln!(
                "Available dictionaries: {}",
                text.dictionary_keys().join(", ")
            );
            return Err(TextError::UnknownDictionary { key: key.clone() });
        }
        text.set_dictionary(key);
    }

    let args: Vec<&dyn std::fmt::Display> = cli
        .args
        .iter()
        .map(|a| a as &dyn std::fmt::Display)
        .collect();

    let (output, diagnostics) = if let Some(dictionary) = &cli.from {
        text.get_from_dictionary_with_diagnostics(dictionary, &cli.template, &args)?
    } else if cli.key {
        text.get_with_diagnostics(&cli.template, &args)
    } else {
        text.format_with_diagnostics(&cli.template, &args)
    };

    if cli.diagnostics {
        print_diagnostics(&diagnostics);
    } else if text.mode() == Mode::Dev {
        for diagnostic in &diagnostics {
            log::warn!("{}", diagnostic);
        }
    }

    Ok(output)
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprint!("{}", diagnostic.format("template"));
    }
}
