use plotters::prelude::*;

use crate::chart::Chart;
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::render::draw::draw_chart;
use crate::render::Presenter;

/// Render a chart to an SVG document
pub fn render_svg(chart: &Chart, width: u32, height: u32) -> Result<String> {
    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, (width, height)).into_drawing_area();
        draw_chart(&root, chart)?;
        root.present().map_err(PlotError::render)?;
    }
    Ok(document)
}

/// Renders every chart to an in-memory SVG document
#[derive(Debug)]
pub struct SvgPresenter {
    width: u32,
    height: u32,
    documents: Vec<String>,
}

impl SvgPresenter {
    pub fn new(width: u32, height: u32) -> Self {
        SvgPresenter {
            width,
            height,
            documents: Vec::new(),
        }
    }

    pub fn with_config(config: &PlotConfig) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<String> {
        self.documents
    }
}

impl Presenter for SvgPresenter {
    fn present(&mut self, chart: &Chart) -> Result<()> {
        let document = render_svg(chart, self.width, self.height)?;
        self.documents.push(document);
        Ok(())
    }
}
