/// Count-up animation for a statistic. Each step adds `target / speed` to the
/// shown value and rounds up; once the value reaches the target it is pinned
/// to the target exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    speed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(u64),
    Done(u64),
}

impl CountUp {
    pub fn new(target: u64, speed: u32) -> Self {
        Self {
            target,
            speed: speed.max(1),
        }
    }

    pub fn next(&self, current: u64) -> Step {
        if current >= self.target {
            return Step::Done(self.target);
        }
        let increment = self.target as f64 / f64::from(self.speed);
        let next = (current as f64 + increment).ceil() as u64;
        // always at least one step forward, even when rounding stalls
        Step::Continue(next.max(current + 1))
    }
}

/// Reads a counter target from a `data-target` attribute value.
pub fn parse_target(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|raw| {
        let raw = raw.trim();
        raw.parse::<u64>().ok().or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u64)
        })
    })
}
