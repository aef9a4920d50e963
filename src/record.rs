//! The record data model and its typed field accessors.
//!
//! Runtime field selection ("sort by FirstName") goes through the [`Field`]
//! enum rather than free-form string keys: a `Field` value can only name a
//! declared field, so the core never needs to validate names. Converting a
//! raw name to a `Field` (and a raw query string to a [`FieldValue`]) is the
//! boundary's job, via `FromStr` and [`Field::parse_value`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One row of the delimited source.
///
/// Field types are fixed: a source row whose `ID` does not parse as an
/// integer fails the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
}

impl Record {
    /// Typed equality of one field against a query value.
    ///
    /// A value whose variant does not match the field's declared type never
    /// matches; [`Field::parse_value`] is how a boundary produces a value of
    /// the right variant.
    pub fn field_matches(&self, field: Field, value: &FieldValue) -> bool {
        match (field, value) {
            (Field::Id, FieldValue::Id(id)) => self.id == *id,
            (Field::FirstName, FieldValue::Text(s)) => self.first_name == *s,
            (Field::LastName, FieldValue::Text(s)) => self.last_name == *s,
            _ => false,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.first_name, self.last_name)
    }
}

/// Enumerated identifier for the record's declared field set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    FirstName,
    LastName,
}

impl Field {
    /// All fields, in source column order.
    pub const ALL: [Field; 3] = [Field::Id, Field::FirstName, Field::LastName];

    /// The field's source column name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::FirstName => "FirstName",
            Field::LastName => "LastName",
        }
    }

    /// Three-way comparison of two records on this field.
    ///
    /// Numeric comparison for `ID`, lexicographic for the text fields. This
    /// is the key selector handed to the sorting strategies; being total
    /// over `Field`, it cannot fail at sort time.
    #[inline]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Field::Id => a.id.cmp(&b.id),
            Field::FirstName => a.first_name.cmp(&b.first_name),
            Field::LastName => a.last_name.cmp(&b.last_name),
        }
    }

    /// Converts a raw query string to this field's declared type.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue> {
        match self {
            Field::Id => raw
                .trim()
                .parse::<u32>()
                .map(FieldValue::Id)
                .map_err(|_| Error::InvalidArgument {
                    what: "ID query value",
                    value: raw.to_string(),
                }),
            Field::FirstName | Field::LastName => Ok(FieldValue::Text(raw.to_string())),
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ID" => Ok(Field::Id),
            "FirstName" => Ok(Field::FirstName),
            "LastName" => Ok(Field::LastName),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A query value carrying the declared type of the field it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Id(u32),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Id(id) => write!(f, "{id}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}
