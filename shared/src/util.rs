use std::sync::atomic::{AtomicI64, Ordering};

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Creation stamp in UTC microseconds, strictly increasing within the process.
///
/// Used to list records in insertion order even when several are created in
/// the same clock tick.
pub fn creation_stamp() -> i64 {
    let now = chrono::Utc::now().timestamp_micros();
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}
