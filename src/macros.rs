/// A macro to create a new `HistoryRecord`.
///
/// # Examples
///
/// ```
/// use curvecast::history;
/// let record = history! {
///     "loss" => [0.9, 0.6, 0.4],
///     "val_loss" => [1.0, 0.8, 0.7],
/// };
/// assert_eq!(record.get("loss"), Some(&[0.9, 0.6, 0.4][..]));
/// ```
///
/// Metrics keep the order they are written in. Values are cast to `f64`.
#[macro_export]
macro_rules! history {
    () => {
        $crate::history::HistoryRecord::new()
    };
    ($( $name:expr => [ $( $value:expr ),* $(,)? ] ),+ $(,)?) => {
        {
            let mut record = $crate::history::HistoryRecord::new();
            $( record.insert($name, vec![$( $value as f64 ),*]); )+
            record
        }
    };
}
