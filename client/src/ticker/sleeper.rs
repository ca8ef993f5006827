use std::time::{Duration, Instant};

/// Keeps consecutive [`Sleeper::sleep`] calls at least `target_delta_time` apart.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Sleeps away whatever is left of the target delta since the previous call.
    /// Returns whether any sleeping happened.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    fn remaining(&self) -> Option<Duration> {
        // Assume we're late if we've never slept yet.
        let last_instant = self.last_instant?;
        let delta_time = last_instant.elapsed();

        (self.target_delta_time > delta_time).then(|| self.target_delta_time - delta_time)
    }
}
