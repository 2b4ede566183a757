//! Side-loaded association population.
//!
//! Zendesk can embed related records next to the primary payload
//! (`?include=users`). A [`SideLoadDirective`] says how to join one field of
//! a primary record against one of those embedded datasets, and
//! [`populate_fields`] applies a list of directives to a record or a list of
//! records.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::rest::{populate_fields, SideLoadDirective};
//! use serde_json::json;
//!
//! const MAP: &[SideLoadDirective] = &[SideLoadDirective::one_to_one("user_id", "user", "users")];
//!
//! let response = json!({
//!     "membership": {"user_id": 5},
//!     "users": [{"id": 5, "name": "A"}, {"id": 6, "name": "B"}]
//! });
//!
//! let record = populate_fields(response["membership"].clone(), &response, MAP);
//! assert_eq!(record["user"], json!({"id": 5, "name": "A"}));
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::rest::response::is_falsy;

/// Join key used when a directive does not name one.
pub const DEFAULT_DATA_KEY: &str = "id";

/// How one field of a primary record is resolved against a dataset of the
/// response.
///
/// Every variant reads `record[field]` and writes the outcome into
/// `record[name]`. The dataset is `response[dataset]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideLoadDirective {
    /// The first dataset record whose `data_key` equals `record[field]`,
    /// or `null` if none does.
    OneToOne {
        /// Source field on the primary record.
        field: &'static str,
        /// Target field written on the primary record.
        name: &'static str,
        /// Top-level key of the dataset in the response.
        dataset: &'static str,
        /// Key compared on each dataset record.
        data_key: &'static str,
    },
    /// Every dataset record whose `data_key` equals `record[field]`, in
    /// dataset order.
    OneToMany {
        /// Source field on the primary record.
        field: &'static str,
        /// Target field written on the primary record.
        name: &'static str,
        /// Top-level key of the dataset in the response.
        dataset: &'static str,
        /// Key compared on each dataset record.
        data_key: &'static str,
    },
    /// The whole dataset, unfiltered.
    AllOf {
        /// Source field on the primary record.
        field: &'static str,
        /// Target field written on the primary record.
        name: &'static str,
        /// Top-level key of the dataset in the response.
        dataset: &'static str,
    },
}

impl SideLoadDirective {
    /// A one-to-one directive joined on `id`.
    #[must_use]
    pub const fn one_to_one(field: &'static str, name: &'static str, dataset: &'static str) -> Self {
        Self::OneToOne {
            field,
            name,
            dataset,
            data_key: DEFAULT_DATA_KEY,
        }
    }

    /// A one-to-many directive joined on `id`.
    #[must_use]
    pub const fn one_to_many(field: &'static str, name: &'static str, dataset: &'static str) -> Self {
        Self::OneToMany {
            field,
            name,
            dataset,
            data_key: DEFAULT_DATA_KEY,
        }
    }

    /// A directive copying the whole dataset.
    #[must_use]
    pub const fn all_of(field: &'static str, name: &'static str, dataset: &'static str) -> Self {
        Self::AllOf {
            field,
            name,
            dataset,
        }
    }

    /// Replaces the join key. Has no effect on [`SideLoadDirective::AllOf`].
    #[must_use]
    pub const fn with_data_key(self, data_key: &'static str) -> Self {
        match self {
            Self::OneToOne {
                field,
                name,
                dataset,
                ..
            } => Self::OneToOne {
                field,
                name,
                dataset,
                data_key,
            },
            Self::OneToMany {
                field,
                name,
                dataset,
                ..
            } => Self::OneToMany {
                field,
                name,
                dataset,
                data_key,
            },
            all @ Self::AllOf { .. } => all,
        }
    }

    /// Returns the source field read from the primary record.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::OneToOne { field, .. } | Self::OneToMany { field, .. } | Self::AllOf { field, .. } => {
                *field
            }
        }
    }

    /// Returns the target field written on the primary record.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OneToOne { name, .. } | Self::OneToMany { name, .. } | Self::AllOf { name, .. } => {
                *name
            }
        }
    }

    /// Returns the top-level response key of the dataset.
    #[must_use]
    pub const fn dataset(&self) -> &'static str {
        match self {
            Self::OneToOne { dataset, .. }
            | Self::OneToMany { dataset, .. }
            | Self::AllOf { dataset, .. } => *dataset,
        }
    }

    fn resolve(&self, id: &Value, dataset: &Value) -> Option<Value> {
        match self {
            Self::AllOf { .. } => Some(dataset.clone()),
            Self::OneToOne { data_key, .. } => {
                let records = dataset.as_array()?;
                Some(
                    records
                        .iter()
                        .find(|record| key_matches(record, data_key, id))
                        .cloned()
                        .unwrap_or(Value::Null),
                )
            }
            Self::OneToMany { data_key, .. } => {
                let records = dataset.as_array()?;
                Some(Value::Array(
                    records
                        .iter()
                        .filter(|record| key_matches(record, data_key, id))
                        .cloned()
                        .collect(),
                ))
            }
        }
    }
}

/// Applies side-load directives to `data` and returns the enriched value.
///
/// `data` is a single record or an array of records. For each object record
/// and each directive, in map order: when the record has the directive's
/// `field`, the dataset `response[dataset]` is resolved and the outcome is
/// written to `record[name]`. A later directive with the same `name`
/// overwrites an earlier one.
///
/// Nothing is written when the record lacks the field, or when the dataset
/// is missing or falsy. One-to-one and one-to-many directives also skip a
/// dataset that is not an array.
///
/// Each dataset is looked up in `response` at most once per call.
#[must_use]
pub fn populate_fields(data: Value, response: &Value, map: &[SideLoadDirective]) -> Value {
    let mut cache = DatasetCache::new(response);

    match data {
        Value::Array(records) => Value::Array(
            records
                .into_iter()
                .map(|record| populate_record(record, &mut cache, map))
                .collect(),
        ),
        record => populate_record(record, &mut cache, map),
    }
}

fn populate_record(record: Value, cache: &mut DatasetCache<'_>, map: &[SideLoadDirective]) -> Value {
    let mut fields = match record {
        Value::Object(fields) => fields,
        other => return other,
    };

    for directive in map {
        apply_directive(&mut fields, cache, directive);
    }

    Value::Object(fields)
}

fn apply_directive(
    fields: &mut Map<String, Value>,
    cache: &mut DatasetCache<'_>,
    directive: &SideLoadDirective,
) {
    let Some(id) = fields.get(directive.field()) else {
        return;
    };
    let Some(dataset) = cache.get(directive.dataset()) else {
        return;
    };
    if let Some(resolved) = directive.resolve(id, dataset) {
        fields.insert(directive.name().to_string(), resolved);
    }
}

struct DatasetCache<'a> {
    response: &'a Value,
    datasets: HashMap<&'static str, Option<&'a Value>>,
}

impl<'a> DatasetCache<'a> {
    fn new(response: &'a Value) -> Self {
        Self {
            response,
            datasets: HashMap::new(),
        }
    }

    fn get(&mut self, dataset: &'static str) -> Option<&'a Value> {
        let response = self.response;
        *self.datasets.entry(dataset).or_insert_with(|| {
            response
                .get(dataset)
                .filter(|value| !is_falsy(value))
        })
    }
}

fn key_matches(record: &Value, data_key: &str, id: &Value) -> bool {
    record.get(data_key).is_some_and(|value| values_equal(value, id))
}

// Numbers compare by value so `5` matches `5.0`; containers never match.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) if l.is_f64() || r.is_f64() => {
            match (l.as_f64(), r.as_f64()) {
                (Some(l), Some(r)) => (l - r).abs() < f64::EPSILON,
                _ => false,
            }
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => left == right,
    }
}
