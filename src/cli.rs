//! Command-line surface of the `paycalc` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::models::PayInputs;

/// Paycheck calculator program
#[derive(Parser, Debug)]
#[command(name = "paycalc", version = "1.0", allow_negative_numbers = true)]
pub struct Cli {
    /// specify config file path
    #[arg(short, long, value_name = "json_file", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// hourly pay rate
    #[arg(short, long = "payrate", value_name = "pay_rate")]
    pub payrate: Option<Decimal>,

    /// # of regular hours
    #[arg(short, long, value_name = "hours")]
    pub regular: Decimal,

    /// # of overtime hours (also accepted as -ot)
    #[arg(short, long, value_name = "hours", default_value = "0.0")]
    pub overtime: Decimal,

    /// overtime pay rate modifier
    #[arg(short = 'm', long, value_name = "modifier", default_value = "1.5")]
    pub overtime_modifier: Decimal,
}

impl Cli {
    /// Parses the process arguments, accepting the `-ot` spelling.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Builds the calculator inputs from the parsed flags.
    pub fn pay_inputs(&self) -> PayInputs {
        PayInputs {
            pay_rate: self.payrate,
            regular_hours: self.regular,
            overtime_hours: self.overtime,
            overtime_modifier: self.overtime_modifier,
        }
    }
}

/// Rewrites the two-letter short flag `-ot` as `--overtime`.
///
/// clap only supports single-character short flags, so `-ot 5` would
/// otherwise parse as `-o` with the value `t`. Both `-ot <v>` and
/// `-ot=<v>` are rewritten; other arguments pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = match arg.to_str() {
                Some("-ot") => Some(OsString::from("--overtime")),
                Some(s) => s
                    .strip_prefix("-ot=")
                    .map(|value| OsString::from(format!("--overtime={value}"))),
                None => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}
