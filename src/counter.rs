use crate::step::{StepResult, Steppable};

/// Counts discrete frames toward a fixed duration.
///
/// The counter is the polling-only core under [`crate::Timer`]: it exposes a
/// progress ratio in `[0, 1]`, an on/off switch for pausing without losing
/// position, and a completed flag after which `step()` is a no-op until
/// [`FrameCounter::reset`].
///
/// Completion fires on the step that `count` reaches `duration`. A zero
/// duration therefore completes on the very first step, without incrementing.
#[derive(Clone, Debug)]
pub struct FrameCounter {
    duration: u64,
    count: u64,
    is_on: bool,
    is_completed: bool,
}

impl FrameCounter {
    /// Create a counter over `duration` frames, on and at frame zero.
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            count: 0,
            is_on: true,
            is_completed: false,
        }
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// `count / duration` in `[0, 1]`; 1.0 once completed.
    pub fn progress_ratio(&self) -> f64 {
        if self.is_completed {
            return 1.0;
        }
        if self.duration == 0 {
            return 0.0;
        }
        self.count as f64 / self.duration as f64
    }

    /// Pause or resume stepping without resetting position.
    pub fn set_on(&mut self, on: bool) {
        self.is_on = on;
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    /// Advance one frame. No-op while off or after completion.
    pub fn step(&mut self) -> StepResult {
        if !self.is_on || self.is_completed {
            return StepResult::IDLE;
        }
        if self.duration > 0 {
            self.count += 1;
        }
        if self.count >= self.duration {
            self.is_completed = true;
            StepResult::COMPLETED
        } else {
            StepResult::PROGRESSED
        }
    }

    /// Back to frame zero, not completed. Leaves the on/off switch alone.
    pub fn reset(&mut self) {
        self.count = 0;
        self.is_completed = false;
    }
}

impl Steppable for FrameCounter {
    fn step(&mut self) -> StepResult {
        FrameCounter::step(self)
    }

    fn reset(&mut self) {
        FrameCounter::reset(self)
    }

    fn is_completed(&self) -> bool {
        FrameCounter::is_completed(self)
    }
}
