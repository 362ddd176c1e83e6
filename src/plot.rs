//! Per-metric plotting of a training history

use log::{debug, warn};

use crate::chart::{epoch_axis, Canvas, SeriesStyle};
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::history::{title_case, HistoryRecord, HistorySource};
use crate::render::Presenter;

/// Draws one chart per training metric and hands each to a presenter
pub struct HistoryPlotter<P: Presenter> {
    config: PlotConfig,
    canvas: Canvas,
    presenter: P,
}

impl<P: Presenter> HistoryPlotter<P> {
    pub fn new(config: PlotConfig, presenter: P) -> Self {
        HistoryPlotter {
            config,
            canvas: Canvas::new(),
            presenter,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Plot every training metric of `history`, returning the chart count.
    ///
    /// The skip count is checked against every metric before anything is
    /// drawn, so a bad skip presents no charts at all.
    pub fn plot<H: HistorySource + ?Sized>(&mut self, history: &H) -> Result<usize> {
        self.config.validate()?;
        let record = history.history_record();
        let prefix = self.config.validation_prefix.clone();

        check_skip(record, &prefix, self.config.skip)?;
        for orphan in record.orphan_validation_metrics(&prefix) {
            warn!("'{}' has no training counterpart and will not be plotted", orphan);
        }

        let mut charts = 0;
        for metric in record.training_metrics(&prefix) {
            self.draw_metric(record, &metric.name, &metric.values)?;
            self.presenter.present(self.canvas.chart())?;
            charts += 1;
        }
        debug!("plotted {} charts from {} metrics", charts, record.len());
        Ok(charts)
    }

    fn draw_metric(&mut self, record: &HistoryRecord, name: &str, values: &[f64]) -> Result<()> {
        let skip = self.config.skip;
        let canvas = &mut self.canvas;
        canvas.clear();

        let epochs = epoch_axis(values.len(), skip);
        debug!("drawing '{}' over epochs 1..={}", name, epochs.len());

        canvas.plot(
            epochs.clone(),
            values[skip..].to_vec(),
            SeriesStyle::Markers,
            format!("Training {}", name),
        )?;

        match record.validation_of(name, &self.config.validation_prefix) {
            Some(validation) => {
                let tail = validation.get(skip..).unwrap_or(&[]);
                canvas.plot(
                    epochs,
                    tail.to_vec(),
                    SeriesStyle::Line,
                    format!("Validation {}", name),
                )?;
                canvas.set_title(format!("Training and validation {}", name));
            }
            None => canvas.set_title(format!("Training {}", name)),
        }

        canvas.set_x_label(self.config.x_label.as_str());
        canvas.set_y_label(title_case(name));
        canvas.legend();
        Ok(())
    }
}

fn check_skip(record: &HistoryRecord, prefix: &str, skip: usize) -> Result<()> {
    for metric in record.training_metrics(prefix) {
        if skip >= metric.values.len() {
            return Err(PlotError::SkipOutOfRange {
                metric: metric.name.clone(),
                skip,
                len: metric.values.len(),
            });
        }
    }
    Ok(())
}
