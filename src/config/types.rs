//! Configuration types for the paycheck calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from JSON or YAML configuration files.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Filing status of the employee.
///
/// Informational only; it does not take part in any calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaritalStatus {
    /// Single filer.
    #[default]
    Single,
    /// Married filer.
    Married,
    /// Head of household.
    HeadOfHousehold,
    /// Any other value found in a configuration file.
    #[serde(other)]
    Other,
}

/// Withholding allowances claimed per jurisdiction.
///
/// Currently inert: allowances are recorded but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allowances {
    /// Federal allowances.
    #[serde(default)]
    pub federal: u32,
    /// State allowances.
    #[serde(default)]
    pub state: u32,
    /// Local allowances.
    #[serde(default)]
    pub local: u32,
}

/// An ordered table of tax categories and their fractional rates.
///
/// Iteration order is the order the categories appear in the configuration
/// document, and it drives both computation and display order.
///
/// # Example
///
/// ```
/// use paycalc::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let table: TaxTable = serde_json::from_str(r#"{"state": 0.04, "federal": 0.1}"#).unwrap();
/// let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["state", "federal"]);
/// assert_eq!(table.get("federal"), Some(Decimal::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaxTable {
    entries: Vec<(String, Decimal)>,
}

impl TaxTable {
    /// Creates an empty tax table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for a category.
    ///
    /// A new category is appended; an existing one keeps its position and
    /// takes the new rate.
    pub fn insert(&mut self, category: impl Into<String>, rate: Decimal) {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = rate,
            None => self.entries.push((category, rate)),
        }
    }

    /// Returns the rate for a category, if present.
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, rate)| *rate)
    }

    /// Iterates over `(category, rate)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.entries.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for TaxTable {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        let mut table = TaxTable::new();
        for (category, rate) in iter {
            table.insert(category, rate);
        }
        table
    }
}

impl Serialize for TaxTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rate) in &self.entries {
            map.serialize_entry(name, rate)?;
        }
        map.end()
    }
}

struct TaxTableVisitor;

impl<'de> Visitor<'de> for TaxTableVisitor {
    type Value = TaxTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of tax category names to fractional rates")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = TaxTable::new();
        while let Some((category, rate)) = access.next_entry::<String, Decimal>()? {
            table.insert(category, rate);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for TaxTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TaxTableVisitor)
    }
}

/// The effective configuration for one paycheck calculation.
///
/// Loaded documents are trusted as-is: absent informational fields take
/// their defaults and an absent `taxes` table is empty. Nothing is merged
/// from the built-in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Filing status.
    #[serde(default)]
    pub marital_status: MaritalStatus,
    /// Number of dependants.
    #[serde(default)]
    pub dependants: u32,
    /// Allowances per jurisdiction.
    #[serde(default)]
    pub allowances: Allowances,
    /// Tax category rates, in document order.
    #[serde(default)]
    pub taxes: TaxTable,
    /// Hourly pay rate, if the configuration supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_rate: Option<Decimal>,
}

impl Default for Configuration {
    /// The built-in configuration used when no file can be loaded.
    fn default() -> Self {
        Self {
            marital_status: MaritalStatus::Single,
            dependants: 0,
            allowances: Allowances {
                federal: 1,
                state: 1,
                local: 1,
            },
            taxes: [
                ("federal", Decimal::new(917, 4)),
                ("state", Decimal::new(435, 4)),
                ("local", Decimal::new(0, 1)),
                ("socialSec", Decimal::new(620, 4)),
                ("medicare", Decimal::new(145, 4)),
            ]
            .into_iter()
            .collect(),
            pay_rate: None,
        }
    }
}
