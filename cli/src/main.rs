use clap::Parser;
use debruijn::{
    ArenaOptions, DEMO_PROGRAM, Error, EvaluatorOptions, Interpreter, Options, arena, evaluator,
    format_error, parser, render_error,
};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use std::process::ExitCode;

const MIB: usize = 1024 * 1024;

/// debruijn - evaluate lambda calculus terms written with de Bruijn indices
#[derive(Parser, Debug)]
#[command(name = "debruijn")]
#[command(about = "Parse and evaluate a de Bruijn term", long_about = None)]
struct Args {
    /// Program text (if neither this nor --file is given, runs the demo program)
    #[arg(conflicts_with = "file")]
    expression: Option<String>,

    /// Read the program from a file
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Capacity of the term pool
    #[arg(long, default_value_t = arena::DEFAULT_MAX_TERMS)]
    max_terms: usize,

    /// Capacity of the value pool
    #[arg(long, default_value_t = arena::DEFAULT_MAX_VALUES)]
    max_values: usize,

    /// Capacity of the environment cell pool
    #[arg(long, default_value_t = arena::DEFAULT_MAX_ENV_CELLS)]
    max_env: usize,

    /// Maximum evaluation recursion depth
    #[arg(long, default_value_t = evaluator::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum term nesting accepted by the parser
    #[arg(long, default_value_t = parser::DEFAULT_MAX_DEPTH)]
    max_parse_depth: usize,

    /// Stack size of the evaluation thread, in MiB
    #[arg(long, default_value_t = 256)]
    stack_size: usize,

    /// Render parse errors as a report pointing into the program text
    #[arg(long)]
    report: bool,

    /// Print pool usage to stderr after the run
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            arena: ArenaOptions {
                max_terms: self.max_terms,
                max_values: self.max_values,
                max_env_cells: self.max_env,
            },
            evaluator: EvaluatorOptions {
                max_depth: self.max_depth,
            },
            max_parse_depth: self.max_parse_depth,
        }
    }

    fn source(&self) -> Result<String> {
        if let Some(expr) = &self.expression {
            return Ok(expr.clone());
        }
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read {}", path.display()))
                // An editor's final newline is not part of the term
                .map(|text| text.trim_end_matches(['\n', '\r']).to_string()),
            None => Ok(DEMO_PROGRAM.to_string()),
        }
    }
}

fn report_error(error: &Error, report: bool) {
    if report {
        render_error(error);
    } else {
        eprintln!("{}", format_error(error));
    }
}

/// Parse, print, evaluate, print. Returns whether the run succeeded.
fn interpret_input(source: &str, options: Options, report: bool, stats: bool) -> bool {
    let interpreter = Interpreter::new(options);

    let ok = match interpreter.parse(source) {
        Ok(term) => {
            println!("parsed:\n{}", term);
            match interpreter.eval(term) {
                Ok(value) => {
                    println!("evaled:\n{}", value);
                    true
                }
                Err(e) => {
                    report_error(&e, report);
                    false
                }
            }
        }
        Err(e) => {
            report_error(&e, report);
            false
        }
    };

    if stats {
        eprintln!("usage: {}", interpreter.usage());
    }
    ok
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use DEBRUIJN_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("DEBRUIJN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = args.source()?;
    let options = args.options();
    let stack_size = args
        .stack_size
        .checked_mul(MIB)
        .ok_or_else(|| miette::miette!("stack size of {} MiB is too large", args.stack_size))?;
    let (report, stats) = (args.report, args.stats);

    tracing::debug!(bytes = source.len(), stack_size, "Starting run");

    // Evaluation recurses on the native stack, which the main thread may not
    // have enough of
    let worker = std::thread::Builder::new()
        .name("eval".to_string())
        .stack_size(stack_size)
        .spawn(move || interpret_input(&source, options, report, stats))
        .into_diagnostic()
        .wrap_err("failed to start the evaluation thread")?;

    let ok = worker
        .join()
        .map_err(|_| miette::miette!("evaluation thread panicked"))?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
