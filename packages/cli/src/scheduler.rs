/// Single-flight build scheduler with a depth-one pending slot.
///
/// At most one generation pass is in flight at a time. A trigger arriving
/// while a pass runs is coalesced into exactly one follow-up pass instead of
/// being dropped, so the last edit in a burst is always reflected.
#[derive(Debug, Default)]
pub struct BuildScheduler {
    in_flight: bool,
    pending: bool,
}

impl BuildScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a pass. Returns true when the caller should run one now;
    /// otherwise the request is queued behind the in-flight pass.
    pub fn request(&mut self) -> bool {
        if self.in_flight {
            self.pending = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Mark the in-flight pass finished, successful or not. Returns true when
    /// a queued request means the caller should immediately run another pass
    /// (the scheduler stays in flight for it).
    pub fn finish(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.in_flight = false;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_runs_immediately() {
        let mut scheduler = BuildScheduler::new();
        assert!(scheduler.request());
    }

    #[test]
    fn test_request_during_flight_is_queued_not_run() {
        let mut scheduler = BuildScheduler::new();
        assert!(scheduler.request());
        assert!(!scheduler.request());
    }

    #[test]
    fn test_queued_request_gets_exactly_one_follow_up_pass() {
        let mut scheduler = BuildScheduler::new();
        assert!(scheduler.request());
        assert!(!scheduler.request());
        assert!(scheduler.finish());
        assert!(!scheduler.finish());
    }

    #[test]
    fn test_burst_of_requests_coalesces_to_one_follow_up() {
        let mut scheduler = BuildScheduler::new();
        assert!(scheduler.request());
        assert!(!scheduler.request());
        assert!(!scheduler.request());
        assert!(!scheduler.request());
        assert!(scheduler.finish());
        assert!(!scheduler.finish());
    }

    #[test]
    fn test_guard_is_released_after_quiet_finish() {
        let mut scheduler = BuildScheduler::new();
        assert!(scheduler.request());
        assert!(!scheduler.finish());
        assert!(scheduler.request());
    }
}
