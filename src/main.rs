use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rpncalc::{
    eval,
    shell::{DEFAULT_PROMPT, Shell, run_script},
};

/// rpncalc evaluates arithmetic, logical and bitwise expressions.
///
/// Without arguments it starts an interactive shell. Type `exit` to leave it
/// and `clear` to wipe the screen.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of a file instead of a single expression.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prompt shown by the interactive shell.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Logs the token stream and the postfix sequence of every expression.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, e.g. "(2+3)*4".
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Some(path) = &args.file {
        return run_file(path);
    }

    if let Some(expression) = &args.expression {
        return match eval(expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let stdin = io::stdin();
    if let Err(e) = Shell::new(args.prompt).run(stdin.lock(), io::stdout()) {
        eprintln!("Shell terminated: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_file(path: &Path) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    match run_script(&script, io::stdout()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            log::warn!("{failures} line(s) of '{}' failed to evaluate", path.display());
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
