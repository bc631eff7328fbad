use std::time::Duration;

pub const DEFAULT_MOVE_DELAY_MS: u64 = 65;
pub const DEFAULT_MOVE_DELAY: Duration = Duration::from_millis(DEFAULT_MOVE_DELAY_MS);

/// Rate limit on player movement: a move is accepted only once `delay` has passed
/// since the last accepted one. Times are offsets on the caller's monotonic frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGate {
    delay: Duration,
    last_move: Duration,
}

impl MoveGate {
    pub fn new(delay: Duration, now: Duration) -> Self {
        Self {
            delay,
            last_move: now,
        }
    }

    pub fn is_open(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_move) >= self.delay
    }

    pub fn rearm(&mut self, now: Duration) {
        self.last_move = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_gate_opens_after_delay() {
        let gate = MoveGate::new(ms(65), ms(1_000));

        assert!(!gate.is_open(ms(1_000)));
        assert!(!gate.is_open(ms(1_064)));
        assert!(gate.is_open(ms(1_065)));
        assert!(gate.is_open(ms(5_000)));
    }

    #[test]
    fn test_rearm_restarts_the_delay() {
        let mut gate = MoveGate::new(ms(65), ms(0));
        gate.rearm(ms(100));

        assert!(!gate.is_open(ms(150)));
        assert!(gate.is_open(ms(165)));
    }

    #[test]
    fn test_clock_going_backwards_keeps_gate_shut() {
        let gate = MoveGate::new(ms(65), ms(500));

        assert!(!gate.is_open(ms(100)));
    }

    #[test]
    fn test_zero_delay_is_always_open() {
        let gate = MoveGate::new(Duration::ZERO, ms(10));

        assert!(gate.is_open(ms(10)));
        assert!(gate.is_open(ms(0)));
    }
}
