use clap::Parser;
use lispy_calc::context::{Context, UnaryMinus};
use lispy_calc::errors::EvalError;
use lispy_calc::repl::{render_parse_error, render_value, OutputFormat, Session};
use lispy_calc::Evaluator;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Prefix-notation calculator: `+ 1 2`, `* 2 (- 10 4) 3`, `% 7 2`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Expression to evaluate once. Reads lines from stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    expr: Option<String>,
    /// Treat `-` with a single operand as negation
    #[arg(long)]
    negate: bool,
    /// Print results as JSON objects
    #[arg(long)]
    json: bool,
    /// No banner and no prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Logs go to stderr and stay silent unless RUST_LOG asks for them.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    let args = Args::parse();

    let mut ctx = Context::default();
    if args.negate {
        ctx = ctx.with_unary_minus(UnaryMinus::Negate);
    }
    let evaluator = Evaluator::new(ctx);
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Plain };

    let code = match args.expr {
        Some(expr) => one_shot(&evaluator, &expr, format),
        None => interactive(&evaluator, format, args.quiet),
    };
    std::process::exit(code);
}

fn one_shot(evaluator: &Evaluator, expr: &str, format: OutputFormat) -> i32 {
    let rendered = match evaluator.eval(expr) {
        Ok(value) => render_value(&value, format),
        Err(EvalError::Parse(e)) => {
            match render_parse_error(&e, format) {
                Ok(msg) => eprintln!("{msg}"),
                Err(e) => eprintln!("{e}"),
            }
            return 1;
        }
        Err(e) => Err(e),
    };
    match rendered {
        Ok(out) => {
            println!("{out}");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

fn interactive(evaluator: &Evaluator, format: OutputFormat, quiet: bool) -> i32 {
    if !quiet {
        println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
        println!("Press Ctrl+c to Exit\n");
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let session = Session::new(evaluator).with_format(format).with_prompt(!quiet);
    match session.run(stdin.lock(), &mut stdout) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}
