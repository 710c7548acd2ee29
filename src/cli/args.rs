//! Clap argument types and resolution against the loaded config.

use clap::{Parser, ValueEnum};

use opdispatch::config::FilterConfig;
use opdispatch::filter::Condition;
use opdispatch::models::OutputFormat;
use opdispatch::ops::Operation;

/// Apply binary arithmetic operations passed around as values.
#[derive(Parser, Debug)]
#[command(name = "opdispatch", version = opdispatch::constants::VERSION)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Output format (overrides config and OPDISPATCH_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply an operation to two operands and print the result.
    Run(RunArgs),

    /// Print the integers in a range that satisfy a condition.
    Filter(FilterArgs),

    /// Walk through every operation and condition with the default inputs.
    Demo,

    /// List the available operations.
    Ops,

    /// Print version and build information.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Operation to apply.
    pub operation: Operation,

    /// Left operand (integer or decimal).
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    /// Right operand (integer or decimal).
    #[arg(allow_negative_numbers = true)]
    pub b: String,
}

/// Arguments for the `filter` subcommand.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Condition to select elements by.
    pub condition: ConditionKind,

    /// First value of the range (inclusive, default from config: 1).
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Last value of the range (inclusive, default from config: 100).
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// Threshold for `greater-than` (default from config: 50).
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,
}

/// Condition names accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ConditionKind {
    Even,
    Odd,
    GreaterThan,
    Prime,
    /// Every condition above, in order.
    All,
}

/// A filter request with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub conditions: Vec<Condition>,
    pub from: i64,
    pub to: i64,
}

impl FilterArgs {
    /// Fill unset flags from config and expand the condition selector.
    pub fn resolve(&self, defaults: &FilterConfig) -> FilterPlan {
        let threshold = self.threshold.unwrap_or(defaults.threshold);
        let conditions = match self.condition {
            ConditionKind::Even => vec![Condition::Even],
            ConditionKind::Odd => vec![Condition::Odd],
            ConditionKind::GreaterThan => vec![Condition::GreaterThan(threshold)],
            ConditionKind::Prime => vec![Condition::Prime],
            ConditionKind::All => Condition::defaults(threshold).to_vec(),
        };
        FilterPlan {
            conditions,
            from: self.from.unwrap_or(defaults.from),
            to: self.to.unwrap_or(defaults.to),
        }
    }
}
