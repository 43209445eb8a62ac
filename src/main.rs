//! `paycalc`: prints a paycheck breakdown for the given hours and pay rate.

use std::process;

use clap::CommandFactory;

use paycalc::calculation::run;
use paycalc::cli::Cli;
use paycalc::error::PaycalcError;
use paycalc::exit_codes;
use paycalc::logging;
use paycalc::report::render;

fn main() {
    logging::init();

    let cli = Cli::parse_normalized();
    let inputs = cli.pay_inputs();

    match run(Some(cli.config.as_path()), &inputs) {
        Ok(result) => print!("{}", render(&result)),
        Err(err @ (PaycalcError::MissingPayRate | PaycalcError::Overflow { .. })) => {
            println!("{err}");
            eprintln!("{}", Cli::command().render_help());
            process::exit(exit_codes::EINVAL);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
