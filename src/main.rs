use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use highlighter::{
    batch::{
        job::{BatchReport, Job, PassReport},
        runner::BatchRunner,
    },
    config::{ExecutionMode, RunConfig},
    errors::errors::{Error, ErrorTip},
    grammar::{grammar::GrammarRegistry, languages::detect_language},
    lexer::{lexer::tokenize, tokens::TokenClass},
    line_and_column,
    render::palette::{parse_override, Palette},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "highlighter",
    version = "0.1.0",
    about = "Regex-driven syntax highlighter for BASIC, SQL and Python sources",
    long_about = "Tokenizes source files with ordered regex grammars and writes\nsyntax-highlighted HTML, timing a sequential and a parallel pass."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight files into HTML documents
    Highlight {
        /// Source files; read from stdin, one per line, when omitted
        files: Vec<PathBuf>,

        /// Directory for the generated HTML
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Worker pool size for the parallel pass (default: available cores)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Which passes to run
        #[arg(long, value_enum, default_value_t = ExecutionMode::Both)]
        mode: ExecutionMode,

        /// Override a token colour, e.g. --color keyword=#ff0000
        #[arg(long = "color", value_parser = parse_override)]
        colors: Vec<(TokenClass, String)>,
    },

    /// Lex a file and print its tokens (debug)
    Lex {
        /// Input source file
        input: PathBuf,

        /// Language id; detected from the extension when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Show token positions
        #[arg(short, long)]
        positions: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Highlight {
            files,
            out_dir,
            workers,
            mode,
            colors,
        } => {
            let mut config = RunConfig::default()
                .with_output_dir(out_dir)
                .with_mode(mode)
                .with_palette(Palette::default().with_overrides(&colors));
            config.workers = workers;

            highlight(files, config)
        }
        Commands::Lex {
            input,
            language,
            positions,
        } => lex(input, language, positions),
    };

    match outcome {
        Ok(code) => code,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn highlight(files: Vec<PathBuf>, config: RunConfig) -> Result<ExitCode, Error> {
    let files = if files.is_empty() {
        collect_paths().map_err(|err| Error::io(&PathBuf::from("<stdin>"), &err))?
    } else {
        files
    };

    let jobs = files.into_iter().map(Job::new).collect::<Vec<_>>();
    let registry = GrammarRegistry::builtin()?;
    let report = BatchRunner::new(registry, config).run(&jobs)?;

    print_report(&report);

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Reads paths from stdin until an empty line or EOF.
fn collect_paths() -> io::Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = vec![];

    println!("Enter file paths (leave blank to finish):");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let path = line.trim();
        if path.is_empty() {
            break;
        }

        paths.push(PathBuf::from(path));
    }

    Ok(paths)
}

fn print_report(report: &BatchReport) {
    for pass in report.passes() {
        print_pass(pass);
    }

    if let (Some(sequential), Some(parallel)) =
        (report.sequential_duration(), report.parallel_duration())
    {
        println!(
            "Time taken to process files sequentially: {:.2} seconds",
            sequential.as_secs_f64()
        );
        println!(
            "Time taken to process files in parallel: {:.2} seconds",
            parallel.as_secs_f64()
        );
    }
}

fn print_pass(pass: &PassReport) {
    println!("[{} pass, {} worker(s)]", pass.mode, pass.workers);

    for result in &pass.results {
        match (&result.error, &result.output_path) {
            (None, Some(output_path)) => println!(
                "Highlighted {} -> {}",
                result.file_path.display(),
                output_path.display()
            ),
            (Some(error), _) => println!("Failed {}: {}", result.file_path.display(), error),
            (None, None) => println!("Skipped {}", result.file_path.display()),
        }
    }

    println!(
        "{} pass finished in {:?} ({} ok, {} failed)",
        pass.mode,
        pass.duration,
        pass.succeeded(),
        pass.failed()
    );
}

fn lex(input: PathBuf, language: Option<String>, positions: bool) -> Result<ExitCode, Error> {
    let source = read_to_string(&input).map_err(|err| Error::io(&input, &err))?;

    let language = match language {
        Some(language) => language,
        None => detect_language(&input)?.to_string(),
    };
    let grammar = GrammarRegistry::builtin()?
        .lookup(&language)
        .map_err(|err| err.with_file(&input))?;

    for token in tokenize(&source, grammar) {
        if positions {
            let (line, column) = line_and_column(&source, token.start_offset());
            println!("{}:{} {}", line, column, token);
        } else {
            token.debug();
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    if let Some(file) = error.get_file() {
        eprintln!("-> {}", file);
    }
}
