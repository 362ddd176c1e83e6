use std::io::{self, Write};

use crate::chart::{Chart, SeriesStyle};
use crate::config::{PlotConfig, MIN_TEXT_HEIGHT, MIN_TEXT_WIDTH};
use crate::error::{PlotError, Result};
use crate::render::Presenter;

const MARKER: char = 'o';
const LINE_POINT: char = '*';
const LINE_FILL: char = '.';

fn glyph(style: SeriesStyle) -> char {
    match style {
        SeriesStyle::Markers => MARKER,
        SeriesStyle::Line => LINE_POINT,
    }
}

/// Position of `value` within `[min_val, max_val]`, in `0.0..=1.0`.
///
/// Halved before subtracting so ranges wider than `f64::MAX` stay finite.
fn fraction(value: f64, min_val: f64, max_val: f64) -> f64 {
    (value / 2.0 - min_val / 2.0) / (max_val / 2.0 - min_val / 2.0)
}

/// Render a chart as ASCII art
pub fn render_text(chart: &Chart, width: usize, height: usize) -> Result<String> {
    if width < MIN_TEXT_WIDTH || height < MIN_TEXT_HEIGHT {
        return Err(PlotError::InvalidParameter {
            name: "width/height".to_string(),
            reason: format!(
                "text chart needs at least {}x{}, got {}x{}",
                MIN_TEXT_WIDTH, MIN_TEXT_HEIGHT, width, height
            ),
        });
    }

    let mut output = format!("{}\n", chart.title);

    let (Some((first, last)), Some((mut min_val, mut max_val))) =
        (chart.epoch_range(), chart.value_range())
    else {
        output.push_str("No data\n");
        return Ok(output);
    };

    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 0.5;
        max_val += 0.5;
    }

    let mut plot = vec![vec![' '; width]; height];

    // Add axes
    for row in plot.iter_mut() {
        row[0] = '|';
    }
    for cell in plot[height - 1].iter_mut() {
        *cell = '-';
    }
    plot[height - 1][0] = '+';

    let column = |epoch: usize| -> usize {
        if last == first {
            return 2;
        }
        (2 + (epoch - first) * (width - 3) / (last - first)).min(width - 1)
    };
    let row = |value: f64| -> usize {
        let scaled = fraction(value, min_val, max_val) * (height - 2) as f64;
        (height - 2) - (scaled.round() as usize).min(height - 2)
    };

    // Lines first so markers stay visible where they overlap
    let mut ordered: Vec<_> = chart.series.iter().collect();
    ordered.sort_by_key(|s| s.style == SeriesStyle::Markers);

    for series in ordered {
        let points: Vec<(usize, usize)> = series
            .points()
            .filter(|(_, v)| v.is_finite())
            .map(|(e, v)| (column(e), row(v)))
            .collect();

        if series.style == SeriesStyle::Line {
            for pair in points.windows(2) {
                let ((c0, r0), (c1, r1)) = (pair[0], pair[1]);
                for c in c0 + 1..c1 {
                    let t = (c - c0) as f64 / (c1 - c0) as f64;
                    let r = r0 as f64 + t * (r1 as f64 - r0 as f64);
                    plot[r.round() as usize][c] = LINE_FILL;
                }
            }
        }
        for (c, r) in points {
            plot[r][c] = glyph(series.style);
        }
    }

    output.push_str(&format!("Max: {:.4}\n", max_val));
    for line in plot.iter() {
        output.push_str(&line.iter().collect::<String>());
        output.push('\n');
    }
    output.push_str(&format!("Min: {:.4}\n", min_val));
    output.push_str(&format!("{}: {}..{} | {}\n", chart.x_label, first, last, chart.y_label));

    if chart.legend {
        for series in &chart.series {
            output.push_str(&format!("  {} {}\n", glyph(series.style), series.label));
        }
    }

    Ok(output)
}

/// Prints every chart as ASCII art
pub struct TerminalPresenter<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        let config = PlotConfig::default();
        TerminalPresenter::new(io::stdout(), config.text_width, config.text_height)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        TerminalPresenter { out, width, height }
    }

    pub fn with_config(out: W, config: &PlotConfig) -> Self {
        Self::new(out, config.text_width, config.text_height)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, chart: &Chart) -> Result<()> {
        let rendered = render_text(chart, self.width, self.height)?;
        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        Ok(())
    }
}
