//! Presenting finished charts
//!
//! A [`Presenter`] receives each chart as soon as it is drawn. The terminal
//! presenter prints an ASCII rendering; the SVG presenter renders through
//! `plotters` into memory.

pub mod draw;
pub mod svg;
pub mod text;

pub use svg::{render_svg, SvgPresenter};
pub use text::{render_text, TerminalPresenter};

use crate::chart::Chart;
use crate::error::Result;

/// Displays charts synchronously, one at a time
pub trait Presenter {
    fn present(&mut self, chart: &Chart) -> Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, chart: &Chart) -> Result<()> {
        (**self).present(chart)
    }
}

/// Keeps a copy of every chart it is shown
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    charts: Vec<Chart>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn into_charts(self) -> Vec<Chart> {
        self.charts
    }

    pub fn clear(&mut self) {
        self.charts.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, chart: &Chart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}
