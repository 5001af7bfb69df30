use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

use super::render;
use crate::utils::errors::FinderError;

/// A single modpack as returned by the catalog. No schema is imposed: columns
/// and the sort key are chosen by the caller at runtime.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ModpackRecord(Map<String, Value>);

impl ModpackRecord {
    pub fn field(&self, name: &str) -> Result<&Value, FinderError> {
        self.0
            .get(name)
            .ok_or_else(|| FinderError::KeyNotFound(name.to_string()))
    }

    /// Textual form of a field: strings verbatim, everything else in repr
    /// style (`True`, `None`, `['a', 'b']`).
    pub fn field_text(&self, name: &str) -> Result<String, FinderError> {
        Ok(render::value_text(self.field(name)?))
    }
}

impl TryFrom<Value> for ModpackRecord {
    type Error = serde_json::Error;

    /// Only JSON objects are records.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    /// Booleans count as 0 and 1.
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Int(i128::from(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i128::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Some(Self::Int(i128::from(u)))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            _ => None,
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    if let (Some(x), Some(y)) = (Numeric::of(a), Numeric::of(b)) {
        return x.compare(&y) == Some(Ordering::Equal);
    }
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(k, v)| b.get(k).map_or(false, |w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

/// Ordering between two catalog values, or `None` when they cannot be
/// ordered. Numbers and booleans compare numerically, strings by code point,
/// arrays element-wise from the first unequal pair then by length.
fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (Numeric::of(a), Numeric::of(b)) {
        return x.compare(&y);
    }
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Array(a), Value::Array(b)) => {
            match a.iter().zip(b).find(|(x, y)| !values_equal(x, y)) {
                Some((x, y)) => compare_values(x, y),
                None => Some(a.len().cmp(&b.len())),
            }
        }
        _ => None,
    }
}

/// Modpacks accumulated across pages, in request order until sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModpackCollection {
    records: Vec<ModpackRecord>,
}

impl ModpackCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, page: Vec<ModpackRecord>) {
        self.records.extend(page);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ModpackRecord] {
        &self.records
    }

    /// Sorts by `key`, highest first. Equal values keep their relative order.
    ///
    /// Every record must carry the key. Values are only checked against each
    /// other when the sort actually compares them; if any such pair cannot be
    /// ordered nothing is reordered and an error is returned.
    pub fn sort_descending(&mut self, key: &str) -> Result<(), FinderError> {
        let order = {
            let values = self
                .records
                .iter()
                .map(|record| record.field(key))
                .collect::<Result<Vec<_>, _>>()?;

            let mut incomparable = false;
            let mut order: Vec<usize> = (0..values.len()).collect();
            order.sort_by(|&a, &b| {
                compare_values(values[b], values[a]).unwrap_or_else(|| {
                    incomparable = true;
                    Ordering::Equal
                })
            });
            if incomparable {
                return Err(FinderError::IncomparableValues(key.to_string()));
            }
            order
        };

        let mut slots: Vec<Option<ModpackRecord>> =
            std::mem::take(&mut self.records).into_iter().map(Some).collect();
        self.records = order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();
        Ok(())
    }
}

impl From<Vec<ModpackRecord>> for ModpackCollection {
    fn from(records: Vec<ModpackRecord>) -> Self {
        Self { records }
    }
}
