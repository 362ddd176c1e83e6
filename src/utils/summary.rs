use crate::config::DEFAULT_VALIDATION_PREFIX;
use crate::history::HistorySource;
use crate::utils::{Export, UtilityModule};

/// Signature under which `summarize_history` is exported
pub type SummarizeHistoryFn = fn(&dyn HistorySource) -> String;

static SUMMARIZE_HISTORY: SummarizeHistoryFn = summarize_history_dyn;

pub static MODULE: UtilityModule = UtilityModule {
    name: "summary",
    exports: &[Export::new("summarize_history", &SUMMARIZE_HISTORY)],
};

/// Create a summary table of every training metric
pub fn summarize_history<H: HistorySource + ?Sized>(history: &H) -> String {
    let record = history.history_record();
    let mut output = String::new();
    output.push_str("Training History Summary\n");
    output.push_str("========================\n");

    for metric in record.training_metrics(DEFAULT_VALIDATION_PREFIX) {
        let Some(&last) = metric.values.last() else {
            output.push_str(&format!("{}: no data\n", metric.name));
            continue;
        };
        let (min_epoch, min_val) = extreme(&metric.values, |a, b| a < b);
        let (max_epoch, max_val) = extreme(&metric.values, |a, b| a > b);

        output.push_str(&format!(
            "{}: Final={:.4}, Min={:.4} (epoch {}), Max={:.4} (epoch {})",
            metric.name, last, min_val, min_epoch, max_val, max_epoch
        ));
        if let Some(&val_last) = record
            .validation_of(&metric.name, DEFAULT_VALIDATION_PREFIX)
            .and_then(|values| values.last())
        {
            output.push_str(&format!(", Validation={:.4}", val_last));
        }
        output.push('\n');
    }

    output
}

/// First extreme value and its 1-based epoch; NaN never wins
fn extreme(values: &[f64], better: impl Fn(f64, f64) -> bool) -> (usize, f64) {
    let mut best = (1, values[0]);
    for (i, &v) in values.iter().enumerate().skip(1) {
        if best.1.is_nan() || better(v, best.1) {
            best = (i + 1, v);
        }
    }
    best
}

fn summarize_history_dyn(history: &dyn HistorySource) -> String {
    summarize_history(history)
}
