//! Training history records
//!
//! A [`HistoryRecord`] maps metric names to one value per epoch, in the order
//! the metrics were first recorded. Validation counterparts share the training
//! metric's name behind a prefix (`val_loss` pairs with `loss`).

pub mod recorder;

pub use recorder::HistoryRecorder;

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{PlotError, Result};

/// Attribute under which history objects expose their record
pub const HISTORY_ATTRIBUTE: &str = "history";

/// One named per-epoch sequence
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Ordered mapping of metric name to per-epoch values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryRecord {
    metrics: Vec<MetricSeries>,
}

impl HistoryRecord {
    pub fn new() -> Self {
        HistoryRecord { metrics: Vec::new() }
    }

    /// Insert or replace a metric. A replaced metric keeps its position.
    pub fn insert<S: Into<String>>(&mut self, name: S, values: Vec<f64>) {
        let name = name.into();
        match self.metrics.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.values = values,
            None => self.metrics.push(MetricSeries { name, values }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.metrics
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.values.as_slice())
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Vec<f64>> {
        self.metrics
            .iter_mut()
            .find(|m| m.name == name)
            .map(|m| &mut m.values)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metrics.iter().any(|m| m.name == name)
    }

    /// Number of metrics, validation counterparts included
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricSeries> {
        self.metrics.iter()
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|m| m.name.as_str())
    }

    /// Metrics that are not validation counterparts, in record order
    pub fn training_metrics<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a MetricSeries> {
        self.metrics.iter().filter(move |m| !m.name.starts_with(prefix))
    }

    /// Validation counterpart of `name`, if recorded
    pub fn validation_of(&self, name: &str, prefix: &str) -> Option<&[f64]> {
        self.get(&format!("{}{}", prefix, name))
    }

    /// Validation keys whose training metric was never recorded
    pub fn orphan_validation_metrics<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.metric_names().filter(move |name| {
            name.strip_prefix(prefix)
                .map_or(false, |base| !self.contains(base))
        })
    }

    /// Normalize a JSON value into a record.
    ///
    /// Accepts either an object of numeric arrays or an object exposing one
    /// under `"history"`, which is how training callbacks serialize their
    /// history object.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            PlotError::Shape(format!("expected an object, got {}", kind_of(value)))
        })?;

        match object.get(HISTORY_ATTRIBUTE) {
            Some(Value::Object(inner)) => Self::from_object(inner),
            Some(other) if !other.is_array() => Err(PlotError::Shape(format!(
                "'{}' attribute must be an object, got {}",
                HISTORY_ATTRIBUTE,
                kind_of(other)
            ))),
            // A metric that happens to be called "history"
            _ => Self::from_object(object),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let mut record = HistoryRecord::new();
        for (name, values) in object {
            let array = values.as_array().ok_or_else(|| {
                PlotError::Shape(format!(
                    "metric '{}' must be a sequence, got {}",
                    name,
                    kind_of(values)
                ))
            })?;
            let numbers = array
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    v.as_f64().ok_or_else(|| {
                        PlotError::Shape(format!(
                            "metric '{}' epoch {} is not numeric: {}",
                            name,
                            i + 1,
                            v
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            record.insert(name.clone(), numbers);
        }
        Ok(record)
    }

    pub fn to_value(&self) -> Value {
        let object: Map<String, Value> = self
            .metrics
            .iter()
            .map(|m| (m.name.clone(), Value::from(m.values.clone())))
            .collect();
        Value::Object(object)
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for HistoryRecord {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        let mut record = HistoryRecord::new();
        for (name, values) in iter {
            record.insert(name, values);
        }
        record
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Anything that can hand out a history record
pub trait HistorySource {
    fn history_record(&self) -> &HistoryRecord;
}

impl HistorySource for HistoryRecord {
    fn history_record(&self) -> &HistoryRecord {
        self
    }
}

/// History object produced at the end of a training run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    /// Zero-based indices of the epochs that were run
    pub epochs: Vec<usize>,

    /// Run parameters such as `batch_size` or `epochs`
    pub params: BTreeMap<String, Value>,

    pub history: HistoryRecord,
}

impl TrainingHistory {
    pub fn new(history: HistoryRecord) -> Self {
        let epochs = (0..history.iter().map(|m| m.values.len()).max().unwrap_or(0)).collect();
        TrainingHistory {
            epochs,
            params: BTreeMap::new(),
            history,
        }
    }

    pub fn with_param<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Read a serialized history object. `epoch` and `params` are optional;
    /// a bare record is accepted too.
    pub fn from_value(value: &Value) -> Result<Self> {
        let history = HistoryRecord::from_value(value)?;
        let mut parsed = TrainingHistory::new(history);

        let Some(object) = value.as_object().filter(|o| o.contains_key(HISTORY_ATTRIBUTE)) else {
            return Ok(parsed);
        };
        if let Some(epochs) = object.get("epoch").and_then(Value::as_array) {
            parsed.epochs = epochs
                .iter()
                .map(|e| {
                    e.as_u64().map(|e| e as usize).ok_or_else(|| {
                        PlotError::Shape(format!(
                            "epoch index must be a non-negative integer, got {}",
                            e
                        ))
                    })
                })
                .collect::<Result<Vec<usize>>>()?;
        }
        if let Some(params) = object.get("params").and_then(Value::as_object) {
            parsed.params = params.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        }
        Ok(parsed)
    }
}

impl HistorySource for TrainingHistory {
    fn history_record(&self) -> &HistoryRecord {
        &self.history
    }
}

impl<H: HistorySource + ?Sized> HistorySource for &H {
    fn history_record(&self) -> &HistoryRecord {
        (**self).history_record()
    }
}

/// Title-case a metric name the way axis labels are written.
///
/// Every letter that follows a non-letter is upper-cased and every other
/// letter lower-cased, so `mean_absolute_error` becomes `Mean_Absolute_Error`
/// and `top5acc` becomes `Top5Acc`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_cased = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }
    out
}
