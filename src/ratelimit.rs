use std::collections::HashMap;

/// Sweep threshold for the key table. Entries are only ever overwritten on
/// window rollover, so without a sweep the table grows with every distinct
/// caller identity seen over the process lifetime.
const MAX_TRACKED_KEYS: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    window_start: u64,
    window_ms: u64,
}

/// Fixed-window request counter keyed by an arbitrary string.
#[derive(Debug, Default)]
pub struct RateLimiter {
    entries: HashMap<String, WindowEntry>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, key: &str, max_requests: u32, window_ms: u64) -> bool {
        self.check_at(key, max_requests, window_ms, now_millis())
    }

    pub fn check_at(&mut self, key: &str, max_requests: u32, window_ms: u64, now_ms: u64) -> bool {
        if let Some(entry) = self.entries.get_mut(key) {
            if now_ms.saturating_sub(entry.window_start) <= entry.window_ms {
                if entry.count >= max_requests {
                    return false;
                }
                entry.count += 1;
                return true;
            }
        }

        // No entry, or its window has expired: start a fresh one.
        if self.entries.len() >= MAX_TRACKED_KEYS {
            self.sweep(now_ms);
        }
        self.entries.insert(
            key.to_string(),
            WindowEntry {
                count: 1,
                window_start: now_ms,
                window_ms,
            },
        );
        true
    }

    fn sweep(&mut self, now_ms: u64) {
        self.entries
            .retain(|_, entry| now_ms.saturating_sub(entry.window_start) <= entry.window_ms);
    }

    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}

pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
