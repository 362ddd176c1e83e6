use crate::history::{HistoryRecord, HistorySource, TrainingHistory};

/// Accumulates a history record one epoch at a time
#[derive(Debug, Clone, Default)]
pub struct HistoryRecorder {
    history: TrainingHistory,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the logs of a finished epoch.
    ///
    /// Metrics seen for the first time start a new series, so a metric that
    /// only appears later in training ends up shorter than the others.
    pub fn on_epoch_end<S, I>(&mut self, logs: I)
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let epoch = self.history.epochs.len();
        self.history.epochs.push(epoch);

        for (name, value) in logs {
            let name = name.as_ref();
            match self.history.history.get_mut(name) {
                Some(values) => values.push(value),
                None => self.history.history.insert(name, vec![value]),
            }
        }
    }

    /// Number of epochs recorded so far
    pub fn epoch_count(&self) -> usize {
        self.history.epochs.len()
    }

    pub fn epochs(&self) -> &[usize] {
        &self.history.epochs
    }

    pub fn history(&self) -> &HistoryRecord {
        &self.history.history
    }

    /// Most recent value of a metric
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.history().get(name).and_then(|values| values.last().copied())
    }

    /// Clear all recorded epochs
    pub fn clear(&mut self) {
        self.history = TrainingHistory::default();
    }

    pub fn finish(self) -> TrainingHistory {
        self.history
    }
}

impl HistorySource for HistoryRecorder {
    fn history_record(&self) -> &HistoryRecord {
        &self.history.history
    }
}
