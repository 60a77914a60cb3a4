use anyhow::Result;
use calcbridge_algo::ReplaceMode;
use calcbridge_ffi::{BackendKind, Operation};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod records;
mod settings;

/// Integer arithmetic computed by a native C library.
///
/// calcbridge calls a small C arithmetic library through a checked Rust
/// boundary. Arguments are range-checked against the C parameter types and
/// error signals (division by zero, overflow) are reported, never hidden.
///
/// EXAMPLES:
///     calcbridge calc add 3 4              Add through the linked library
///     calcbridge calc div 10 0             Fails with "division by zero"
///     calcbridge calc add-checked 2147483647 1 --json
///     calcbridge ops                       List operations and C signatures
///     calcbridge algo two-sum --target 9 2 7 11 15
///     calcbridge palindrome "A man, a plan, a canal: Panama"
///
/// ENVIRONMENT VARIABLES:
///     CALCBRIDGE_BACKEND  Backend: linked, dynamic or checked
///     CALCBRIDGE_LIBRARY  Shared library for the dynamic backend
///     CALCBRIDGE_LOG      Log level (error, warn, info, debug, trace)
///     CALCBRIDGE_JSON     Set to '1' for JSON output by default
///     RUST_LOG            Full tracing filter, overrides CALCBRIDGE_LOG
#[derive(Parser)]
#[command(name = "calcbridge")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Use this project config file instead of searching for calcbridge.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call one arithmetic operation
    ///
    /// Arguments are parsed as 64-bit integers and marshalled to the C
    /// parameter type of the operation. A value that does not fit is an
    /// error, not a silent truncation.
    ///
    /// EXAMPLES:
    ///     calcbridge calc add 3 4
    ///     calcbridge calc abs -7
    ///     calcbridge calc add-long 9000000000 1
    ///     calcbridge calc mul 6 7 --backend checked
    ///     calcbridge calc div 10 2 --backend dynamic --library ./libcalc.so
    #[command(visible_alias = "c")]
    Calc {
        /// Operation name (see `calcbridge ops`)
        op: Operation,
        /// Integer arguments
        #[arg(allow_negative_numbers = true)]
        args: Vec<i64>,
        /// Backend to call (linked, dynamic or checked)
        #[arg(long, short = 'b')]
        backend: Option<BackendKind>,
        /// Shared library name or path for the dynamic backend
        #[arg(long, short = 'l')]
        library: Option<String>,
        /// Output a JSON record
        #[arg(long)]
        json: bool,
    },

    /// List the operations and their C signatures
    ///
    /// EXAMPLES:
    ///     calcbridge ops
    ///     calcbridge ops --json | jq
    Ops {
        /// Output JSON records
        #[arg(long)]
        json: bool,
    },

    /// Run an array exercise on integers from the command line
    ///
    /// EXAMPLES:
    ///     calcbridge algo two-sum --target 9 2 7 11 15
    ///     calcbridge algo three-sum -- -1 0 1 2 -1 -4
    ///     calcbridge algo rotate --k 3 1 2 3 4 5 6 7
    ///     calcbridge algo merge --first 1,2,3 --second 2,5,6
    Algo {
        #[command(subcommand)]
        exercise: commands::algo::Exercise,
        /// Output a JSON record
        #[arg(long, global = true)]
        json: bool,
    },

    /// Check whether text reads the same backwards, letters only
    ///
    /// Case and every non-letter character are ignored.
    ///
    /// EXAMPLES:
    ///     calcbridge palindrome "No lemon, no melon"
    Palindrome {
        /// Text to check
        text: String,
        /// Output a JSON record
        #[arg(long)]
        json: bool,
    },

    /// Replace occurrences of one string with another
    ///
    /// EXAMPLES:
    ///     calcbridge replace "go gopher go" go Go
    ///     calcbridge replace "go gopher go" go Go --mode first
    Replace {
        /// Input text
        input: String,
        /// Text to look for (empty matches between every character)
        old: String,
        /// Replacement text
        new: String,
        /// How many occurrences to replace (all, first or none)
        #[arg(long, short = 'm', default_value = "all")]
        mode: ReplaceMode,
        /// Output a JSON record
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     calcbridge completions bash > /etc/bash_completion.d/calcbridge
    ///     calcbridge completions zsh > ~/.zfunc/_calcbridge
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = settings::load(cli.config.as_deref())?;
    init_tracing(config.log_level(), cli.verbose);
    settings::log_loaded(&config);

    match cli.command {
        Commands::Calc {
            op,
            args,
            backend,
            library,
            json,
        } => {
            settings::apply_backend_flags(&mut config, backend, library);
            config.validate()?;
            let backend = settings::build_backend(&config)?;
            // Command-line flag or config turns JSON on
            commands::calc::run(backend.as_ref(), op, &args, json || config.json())?;
        }
        Commands::Ops { json } => {
            commands::ops::run(json || config.json())?;
        }
        Commands::Algo { exercise, json } => {
            commands::algo::run(exercise, json || config.json())?;
        }
        Commands::Palindrome { text, json } => {
            commands::palindrome::run(&text, json || config.json())?;
        }
        Commands::Replace {
            input,
            old,
            new,
            mode,
            json,
        } => {
            commands::replace::run(&input, &old, &new, mode, json || config.json())?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "calcbridge", &mut io::stdout());
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine readable
fn init_tracing(level: &str, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
