use serde::Serialize;
use std::time::Instant;

/// Elapsed time of one estimation stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Per-call timing trace.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

/// Lap timer that appends one [`StageTiming`] per completed stage.
pub(crate) struct StageClock {
    start: Instant,
    lap: Instant,
    stages: Vec<StageTiming>,
}

impl StageClock {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            lap: now,
            stages: Vec::with_capacity(3),
        }
    }

    pub fn lap(&mut self, label: &'static str) {
        let now = Instant::now();
        self.stages.push(StageTiming {
            label,
            elapsed_ms: ms_between(self.lap, now),
        });
        self.lap = now;
    }

    pub fn finish(self) -> TimingBreakdown {
        TimingBreakdown {
            total_ms: ms_between(self.start, Instant::now()),
            stages: self.stages,
        }
    }
}

fn ms_between(a: Instant, b: Instant) -> f64 {
    b.duration_since(a).as_secs_f64() * 1000.0
}
