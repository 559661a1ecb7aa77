use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Pause between progress ticks while a call is waiting
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // One wall-clock second per tick, as the tool advertises
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_interval(mut self, tick: Duration) -> Self {
        self.tick_interval = tick;
        self
    }
}
