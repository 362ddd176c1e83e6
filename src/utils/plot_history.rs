use crate::config::PlotConfig;
use crate::error::Result;
use crate::history::HistorySource;
use crate::plot::HistoryPlotter;
use crate::render::TerminalPresenter;
use crate::utils::{Export, UtilityModule};

/// Signature under which `plot_history` is exported
pub type PlotHistoryFn = fn(&dyn HistorySource, usize) -> Result<()>;

static PLOT_HISTORY: PlotHistoryFn = plot_history_dyn;

pub static MODULE: UtilityModule = UtilityModule {
    name: "plot_history",
    exports: &[Export::new("plot_history", &PLOT_HISTORY)],
};

/// Print one chart per training metric to stdout, leaving out the first
/// `skip` epochs of each.
///
/// Validation metrics (`val_*`) are drawn on their training metric's chart.
///
/// ```no_run
/// use curvecast::history::HistoryRecord;
/// use curvecast::utils::plot_history;
///
/// let history: HistoryRecord = vec![
///     ("loss", vec![0.9, 0.6, 0.4]),
///     ("val_loss", vec![1.0, 0.7, 0.6]),
/// ]
/// .into_iter()
/// .collect();
/// plot_history(&history, 1).unwrap();
/// ```
pub fn plot_history<H: HistorySource + ?Sized>(history: &H, skip: usize) -> Result<()> {
    let config = PlotConfig::default().with_skip(skip);
    let presenter = TerminalPresenter::with_config(std::io::stdout(), &config);
    HistoryPlotter::new(config, presenter).plot(history)?;
    Ok(())
}

fn plot_history_dyn(history: &dyn HistorySource, skip: usize) -> Result<()> {
    plot_history(history, skip)
}
