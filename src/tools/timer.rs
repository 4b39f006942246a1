use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

/// Accumulates wall-clock time per named stage. Each `mark` charges the time since the
/// previous mark (or since creation) to the stage named.
#[derive(Clone, Debug)]
pub struct Timer {
    start: Instant,
    last: Instant,
    marks: Vec<(&'static str, Duration)>,
}

impl Default for Timer {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            marks: Vec::new(),
        }
    }
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, stage: &'static str) {
        let now = Instant::now();
        let elapsed = now - self.last;
        match self.marks.iter_mut().find(|(s, _)| *s == stage) {
            Some((_, total)) => *total += elapsed,
            None => self.marks.push((stage, elapsed)),
        }
        self.last = now;
    }

    /// Time charged to a stage so far.
    pub fn elapsed(&self, stage: &str) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, d)| *d)
    }

    pub fn total(&self) -> Duration {
        self.last - self.start
    }
}

impl Display for Timer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (stage, d) in &self.marks {
            write!(f, "{}: {}us, ", stage, d.as_micros())?;
        }
        write!(f, "total: {}us", self.total().as_micros())
    }
}
