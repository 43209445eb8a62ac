//! Configuration resolution for the paycheck calculator.
//!
//! This module loads the filing parameters and tax-rate table from a JSON
//! or YAML file, falling back to a built-in configuration when the file is
//! missing or malformed.
//!
//! # Example
//!
//! ```no_run
//! use paycalc::config::resolve;
//!
//! let config = resolve(None);
//! for (category, rate) in config.taxes.iter() {
//!     println!("{category}: {rate}");
//! }
//! ```

mod loader;
mod types;

pub use loader::{DEFAULT_CONFIG_FILE, load, resolve};
pub use types::{Allowances, Configuration, MaritalStatus, TaxTable};
