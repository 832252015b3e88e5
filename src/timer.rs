use tracing::debug;

/// The refresh timer that drives `tick` while a round is running.
///
/// It is bound to one round at a time. Ticks only reach the controller while
/// the timer is armed for the controller's current round, so a tick left over
/// from a restarted round is dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoundTimer {
    armed_for: Option<u64>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for `round_id`. Returns false if it was already armed for that round.
    pub fn arm(&mut self, round_id: u64) -> bool {
        if self.armed_for == Some(round_id) {
            return false;
        }
        if let Some(previous) = self.armed_for {
            debug!(round = previous, "timer re-armed, dropping previous round");
        }
        self.armed_for = Some(round_id);
        debug!(round = round_id, "timer armed");
        true
    }

    /// Stop ticking. Returns true exactly once per arming.
    pub fn cancel(&mut self) -> bool {
        match self.armed_for.take() {
            Some(round_id) => {
                debug!(round = round_id, "timer cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_for.is_some()
    }

    pub fn is_armed_for(&self, round_id: u64) -> bool {
        self.armed_for == Some(round_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let timer = RoundTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.is_armed_for(1));
    }

    #[test]
    fn test_arm_once_per_round() {
        let mut timer = RoundTimer::new();

        assert!(timer.arm(1));
        assert!(!timer.arm(1));
        assert!(timer.is_armed_for(1));
        assert!(!timer.is_armed_for(2));
    }

    #[test]
    fn test_cancel_exactly_once() {
        let mut timer = RoundTimer::new();
        timer.arm(4);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_rearm_for_new_round() {
        let mut timer = RoundTimer::new();
        timer.arm(1);

        assert!(timer.arm(2));
        assert!(!timer.is_armed_for(1));
        assert!(timer.is_armed_for(2));
    }
}
