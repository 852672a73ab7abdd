// Clock port: record timestamps are epoch milliseconds, UTC

pub trait TimeProvider: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
