//! Coarse throughput: how many lines a source emitted in the last minute.

use std::time::{Duration, SystemTime};

use crate::client::Tailer;
use crate::correlate::ReportRow;
use crate::error::Result;

/// Trailing window sampled for each row.
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

/// Count the lines `source_id` emitted in `[now - 60s, now)`.
///
/// This is a count, not a per-second rate.
pub fn sample_rate<T: Tailer + ?Sized>(tailer: &T, source_id: &str, now: SystemTime) -> Result<usize> {
    let start = now.checked_sub(RATE_WINDOW).unwrap_or(SystemTime::UNIX_EPOCH);
    Ok(tailer.tail(source_id, start, now)?.len())
}

/// Fill in `rate` on every row, one tailer call per row, in row order.
///
/// `clock` is read once per row so each window ends when its sample is taken.
pub fn sample_rates<T, C>(rows: &mut [ReportRow], tailer: &T, mut clock: C) -> Result<()>
where
    T: Tailer + ?Sized,
    C: FnMut() -> SystemTime,
{
    for row in rows.iter_mut() {
        row.rate = Some(sample_rate(tailer, &row.source_id, clock())?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::UNIX_EPOCH;

    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingTailer {
        calls: RefCell<Vec<(String, SystemTime, SystemTime)>>,
    }

    impl Tailer for RecordingTailer {
        fn tail(&self, source_id: &str, start: SystemTime, end: SystemTime) -> Result<Vec<String>> {
            self.calls.borrow_mut().push((source_id.to_string(), start, end));
            Ok(vec!["line".to_string(); source_id.len()])
        }
    }

    struct FailingTailer;

    impl Tailer for FailingTailer {
        fn tail(&self, _: &str, _: SystemTime, _: SystemTime) -> Result<Vec<String>> {
            Err(Error::Fetch {
                url: "read".to_string(),
                reason: "boom".to_string(),
            })
        }
    }

    fn row(id: &str) -> ReportRow {
        ReportRow {
            source_id: id.to_string(),
            app_name: String::new(),
            count: 0,
            expired: 0,
            cache_duration: Duration::ZERO,
            rate: None,
        }
    }

    #[test]
    fn test_sample_rate_window_is_sixty_seconds() {
        let tailer = RecordingTailer::default();
        let now = UNIX_EPOCH + Duration::from_secs(1_000);
        let count = sample_rate(&tailer, "abc", now).unwrap();
        assert_eq!(count, 3);

        let calls = tailer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (id, start, end) = &calls[0];
        assert_eq!(id, "abc");
        assert_eq!(*end, now);
        assert_eq!(end.duration_since(*start).unwrap(), RATE_WINDOW);
    }

    #[test]
    fn test_sample_rates_once_per_row_in_order() {
        let tailer = RecordingTailer::default();
        let mut rows = vec![row("a"), row("bb"), row("ccc")];
        let mut tick = 0;
        sample_rates(&mut rows, &tailer, || {
            tick += 1;
            UNIX_EPOCH + Duration::from_secs(100 + tick)
        })
        .unwrap();

        let rates: Vec<_> = rows.iter().map(|r| r.rate).collect();
        assert_eq!(rates, vec![Some(1), Some(2), Some(3)]);

        let calls = tailer.calls.borrow();
        let ids: Vec<_> = calls.iter().map(|c| c.0.as_str()).collect();
        assert_eq!(ids, vec!["a", "bb", "ccc"]);
        assert_eq!(calls[2].2, UNIX_EPOCH + Duration::from_secs(103));
    }

    #[test]
    fn test_sample_rates_propagates_failure() {
        let mut rows = vec![row("a")];
        let err = sample_rates(&mut rows, &FailingTailer, SystemTime::now).unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
