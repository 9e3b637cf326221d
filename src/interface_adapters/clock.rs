use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::Clock;

// System clock adapter used by production wiring.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
