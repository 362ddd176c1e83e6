//! Chart model and the reusable canvas charts are drawn into

use crate::error::{PlotError, Result};

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Discrete markers, one per epoch
    Markers,
    /// Connected line through every epoch
    Line,
}

/// One labelled series of per-epoch values
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: SeriesStyle,
    pub epochs: Vec<usize>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.epochs.iter().copied().zip(self.values.iter().copied())
    }
}

/// A finished chart, ready to be presented
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub legend: bool,
}

impl Chart {
    /// Inclusive epoch range covered by all series
    pub fn epoch_range(&self) -> Option<(usize, usize)> {
        let first = self.series.iter().filter_map(|s| s.epochs.first()).min()?;
        let last = self.series.iter().filter_map(|s| s.epochs.last()).max()?;
        Some((*first, *last))
    }

    /// Smallest and largest finite value across all series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .peekable();
        values.peek()?;
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        Some((min, max))
    }
}

/// Epoch axis for a sequence of `len` values with the first `skip` dropped.
///
/// Epochs are 1-based, so the axis is `1..=len - skip`.
pub fn epoch_axis(len: usize, skip: usize) -> Vec<usize> {
    (1..=len.saturating_sub(skip)).collect()
}

/// Mutable drawing surface reused for every chart of a plotting pass
#[derive(Debug, Default)]
pub struct Canvas {
    chart: Chart,
    clears: usize,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the surface so nothing from the previous chart remains
    pub fn clear(&mut self) {
        self.chart = Chart::default();
        self.clears += 1;
    }

    /// Add a series. Epochs and values must have the same length.
    pub fn plot<S: Into<String>>(
        &mut self,
        epochs: Vec<usize>,
        values: Vec<f64>,
        style: SeriesStyle,
        label: S,
    ) -> Result<()> {
        let label = label.into();
        if epochs.len() != values.len() {
            return Err(PlotError::DimensionMismatch {
                expected: format!("{} values for '{}'", epochs.len(), label),
                actual: format!("{} values", values.len()),
            });
        }
        self.chart.series.push(Series {
            label,
            style,
            epochs,
            values,
        });
        Ok(())
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.chart.title = title.into();
    }

    pub fn set_x_label<S: Into<String>>(&mut self, label: S) {
        self.chart.x_label = label.into();
    }

    pub fn set_y_label<S: Into<String>>(&mut self, label: S) {
        self.chart.y_label = label.into();
    }

    pub fn legend(&mut self) {
        self.chart.legend = true;
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// How many times the canvas has been reset
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}
