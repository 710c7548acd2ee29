//! opdispatch: apply binary operations passed around as values.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use opdispatch::config;
use opdispatch::constants;
use opdispatch::env;
use opdispatch::filter;
use opdispatch::logging;
use opdispatch::models;
use opdispatch::ops;
use opdispatch::output;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::args::{Cli, Command, FilterArgs, RunArgs};
use config::Config;
use env::Env;
use filter::Condition;
use models::{DispatchOutcome, Number, OutputFormat};
use ops::Operation;
use output::OutputRenderer;
use output::json::JsonRenderer;
use output::plain::PlainRenderer;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(cli.verbose, &env);

    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let config = Config::load(Some(&cwd), &env).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    // CLI flag takes priority over config
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Command::Run(args) => run_dispatch(args, format),
        Command::Filter(args) => run_filter(args, &config, format),
        Command::Demo => run_demo(&config, format),
        Command::Ops => run_ops(format),
        Command::Version => run_version(),
    }
}

/// Parse both operands and dispatch the selected operation.
fn run_dispatch(args: RunArgs, format: OutputFormat) -> Result<()> {
    let a: Number = args.a.parse()?;
    let b: Number = args.b.parse()?;

    let outcome = ops::execute_operation(args.operation, a, b)
        .with_context(|| format!("failed to {} {} and {}", args.operation, a, b))?;

    print!("{}", output::renderer(format).render_dispatch(&outcome));
    Ok(())
}

/// Select the elements of a range matching one or all conditions.
fn run_filter(args: FilterArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let plan = args.resolve(&config.filter);

    match format {
        OutputFormat::Plain => stream_plain(&[], &plan.conditions, plan.from, plan.to),
        OutputFormat::Json => {
            let outcomes = filter::apply_all(&plan.conditions, plan.from, plan.to)?;
            print!("{}", JsonRenderer.render_filter(&outcomes));
            Ok(())
        }
    }
}

/// Dispatch every registered operation on `(1, 2)`, then run every default
/// condition over the configured range.
fn run_demo(config: &Config, format: OutputFormat) -> Result<()> {
    let dispatches = Operation::all()
        .into_iter()
        .map(|op| ops::execute_operation(op, Number::Int(1), Number::Int(2)))
        .collect::<Result<Vec<_>, _>>()?;
    let conditions = Condition::defaults(config.filter.threshold);
    let (from, to) = (config.filter.from, config.filter.to);

    match format {
        OutputFormat::Plain => stream_plain(&dispatches, &conditions, from, to),
        OutputFormat::Json => {
            let filters = filter::apply_all(&conditions, from, to)?;
            print!("{}", JsonRenderer.render_demo(&dispatches, &filters));
            Ok(())
        }
    }
}

/// Write plain output to stdout as it is produced.
///
/// Every range is validated before the first byte is written. A closed
/// pipe (e.g. `| head`) ends output quietly.
fn stream_plain(
    dispatches: &[DispatchOutcome],
    conditions: &[Condition],
    from: i64,
    to: i64,
) -> Result<()> {
    let groups = conditions
        .iter()
        .map(|&condition| filter::select(condition, from, to).map(|elements| (condition, elements)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = io::BufWriter::new(io::stdout().lock());
    match write_plain(&mut out, dispatches, groups).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}

fn write_plain<W, I>(
    out: &mut W,
    dispatches: &[DispatchOutcome],
    groups: Vec<(Condition, I)>,
) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = i64>,
{
    let renderer = PlainRenderer;
    if !dispatches.is_empty() {
        for outcome in dispatches {
            out.write_all(renderer.render_dispatch(outcome).as_bytes())?;
        }
        writeln!(out)?;
    }
    for (condition, elements) in groups {
        let count = renderer.write_group(out, elements)?;
        debug!(%condition, count, "filter group written");
    }
    Ok(())
}

/// List available operations.
fn run_ops(format: OutputFormat) -> Result<()> {
    print!("{}", output::renderer(format).render_operations(&Operation::all()));
    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
