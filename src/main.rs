use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use treelox::{
    error::Diagnostic,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse},
    run,
};

/// treelox runs scripts written in a small Lox-style language, or starts an
/// interactive prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    script: Option<PathBuf>,

    /// Print the token stream instead of running.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed program as s-expressions instead of running.
    #[arg(short, long)]
    ast: bool,

    /// Raise log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Exit status for scripts with scan or parse errors.
const EXIT_DATA_ERROR: u8 = 65;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match &args.script {
        Some(path) => {
            let Ok(source) = fs::read_to_string(path) else {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          path.display());
                return ExitCode::FAILURE;
            };
            run_file(&source, &args)
        },
        None => run_prompt(&args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_file(source: &str, args: &Args) -> io::Result<ExitCode> {
    let mut interpreter = Interpreter::new(io::stdout().lock());
    let diagnostics = execute(source, args, &mut interpreter)?;

    if diagnostics.iter().any(Diagnostic::is_static) {
        return Ok(ExitCode::from(EXIT_DATA_ERROR));
    }
    Ok(ExitCode::SUCCESS)
}

/// Reads lines from stdin and runs each one. Globals persist between lines.
fn run_prompt(args: &Args) -> io::Result<ExitCode> {
    let mut interpreter = Interpreter::new(io::stdout());
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(ExitCode::SUCCESS);
        };
        execute(&line, args, &mut interpreter)?;
    }
}

/// Runs or dumps one chunk of source, printing diagnostics to stderr.
fn execute<W: Write>(source: &str,
                     args: &Args,
                     interpreter: &mut Interpreter<W>)
                     -> io::Result<Vec<Diagnostic>> {
    let diagnostics = if args.tokens || args.ast {
        dump(source, args)
    } else {
        run(source, interpreter)?
    };

    for diagnostic in &diagnostics {
        eprintln!("{diagnostic}");
    }
    Ok(diagnostics)
}

/// Prints tokens and/or the syntax tree instead of running.
fn dump(source: &str, args: &Args) -> Vec<Diagnostic> {
    let (tokens, scan_errors) = scan(source);
    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let mut diagnostics: Vec<Diagnostic> = scan_errors.into_iter().map(Diagnostic::from).collect();
    if args.ast {
        let (statements, parse_errors) = parse(&tokens);
        for statement in &statements {
            println!("{statement}");
        }
        diagnostics.extend(parse_errors.into_iter().map(Diagnostic::from));
    }
    diagnostics
}
