use std::collections::HashMap;
use tokio::sync::Mutex;

/// Outcome of registering one sensor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDecision {
    /// Alert recorded; threshold not yet crossed.
    Accumulated(u32),
    /// Threshold crossed; the counter was reset and a mission should launch.
    TriggerMission,
}

/// Per-sensor alert debouncer. Counter entries are created lazily on first
/// report and live for the process lifetime; counts only ever grow between
/// resets.
#[derive(Debug)]
pub struct AlertAggregator {
    threshold: u32,
    counters: Mutex<HashMap<String, u32>>,
}

impl AlertAggregator {
    pub fn new(threshold: u32) -> Self {
        Self { threshold, counters: Mutex::new(HashMap::new()) }
    }

    pub fn threshold(&self) -> u32 { self.threshold }

    /// Registers one report. Increment, compare and reset run under a single
    /// lock acquisition, so two concurrent reports for the same sensor can
    /// neither both observe a just-under-threshold count nor lose a reset.
    /// The critical section never awaits network traffic.
    pub async fn report(&self, sensor_id: &str) -> AlertDecision {
        let mut counters = self.counters.lock().await;
        let count = counters.entry(String::from(sensor_id)).or_insert(0);
        *count += 1;
        if *count > self.threshold {
            *count = 0;
            AlertDecision::TriggerMission
        } else {
            AlertDecision::Accumulated(*count)
        }
    }

    /// Current count for a sensor; 0 for sensors that never reported.
    pub async fn count(&self, sensor_id: &str) -> u32 {
        self.counters.lock().await.get(sensor_id).copied().unwrap_or(0)
    }
}
