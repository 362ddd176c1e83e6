use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::{Chart, SeriesStyle};
use crate::error::{PlotError, Result};

const MARKER_SIZE: i32 = 3;

/// Draw a chart onto any `plotters` drawing area
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
) -> Result<()> {
    let (first, last) = chart.epoch_range().unwrap_or((1, 1));
    let x_range = epoch_range(first, last)?;
    let (min_val, max_val) = padded(chart.value_range().unwrap_or((0.0, 1.0)))?;

    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut ctx = ChartBuilder::on(root)
        .caption(chart.title.as_str(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, min_val..max_val)
        .map_err(PlotError::render)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(PlotError::render)?;

    for series in &chart.series {
        let points = series
            .points()
            .filter(|(_, v)| v.is_finite())
            // in range: epoch_range checked the largest epoch
            .map(|(e, v)| (e as u32, v));

        match series.style {
            SeriesStyle::Markers => {
                ctx.draw_series(points.map(|p| Circle::new(p, MARKER_SIZE, BLUE.filled())))
                    .map_err(PlotError::render)?
                    .label(series.label.as_str())
                    .legend(|(x, y)| Circle::new((x + 10, y), MARKER_SIZE, BLUE.filled()));
            }
            SeriesStyle::Line => {
                ctx.draw_series(LineSeries::new(points, &BLUE))
                    .map_err(PlotError::render)?
                    .label(series.label.as_str())
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
            }
        }
    }

    if chart.legend {
        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(PlotError::render)?;
    }

    Ok(())
}

/// x axis with one spare epoch on each side
fn epoch_range(first: usize, last: usize) -> Result<std::ops::Range<u32>> {
    let too_many = || PlotError::Render(format!("epoch {} is past the drawable x axis", last));
    let first = u32::try_from(first).map_err(|_| too_many())?;
    let end = u32::try_from(last)
        .ok()
        .and_then(|last| last.checked_add(1))
        .ok_or_else(too_many)?;
    Ok(first.saturating_sub(1)..end)
}

/// y axis with a 5% margin; the backend maps through `max - min`, which must stay finite
fn padded((min_val, max_val): (f64, f64)) -> Result<(f64, f64)> {
    if (max_val - min_val).abs() < f64::EPSILON {
        return Ok((min_val - 0.5, max_val + 0.5));
    }
    let margin = (max_val - min_val) * 0.05;
    let (lo, hi) = (min_val - margin, max_val + margin);
    if !(hi - lo).is_finite() {
        return Err(PlotError::Render(format!(
            "value range {:e}..{:e} is too wide to draw",
            min_val, max_val
        )));
    }
    Ok((lo, hi))
}
