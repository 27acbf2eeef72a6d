use std::fmt;

use crate::{
    counter::FrameCounter,
    ease::Ease,
    step::{StepResult, Steppable},
};

/// Snapshot of a timer's observable state, passed to listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerState {
    pub duration: u64,
    pub count: u64,
    pub progress_ratio: f64,
    pub is_completed: bool,
}

type Listener = Box<dyn FnMut(&TimerState)>;

/// A [`FrameCounter`] with optional progress/completion listeners.
///
/// Listeners are optional; the polling surface (`state`, `progress_ratio`,
/// `is_completed`, and the [`StepResult`] returned by `step`) carries the
/// same information, and the return-value style is preferred for hosts that
/// inspect state after stepping rather than mutating it from closures.
///
/// On each effective step the progress listener fires with the post-step
/// state, including on the completing step; the completion listener fires
/// after it, exactly once per completion cycle. A panic in a listener
/// propagates to the `step()` caller, no catching is performed.
pub struct Timer {
    counter: FrameCounter,
    on_progress: Option<Listener>,
    on_complete: Option<Listener>,
}

impl Timer {
    /// Create a timer over `duration` frames with no listeners attached.
    pub fn new(duration: u64) -> Self {
        Self {
            counter: FrameCounter::new(duration),
            on_progress: None,
            on_complete: None,
        }
    }

    /// Attach a listener invoked on every effective step.
    pub fn with_on_progress(mut self, f: impl FnMut(&TimerState) + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    /// Attach a listener invoked once per completion cycle.
    pub fn with_on_complete(mut self, f: impl FnMut(&TimerState) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn set_on_progress(&mut self, f: impl FnMut(&TimerState) + 'static) {
        self.on_progress = Some(Box::new(f));
    }

    pub fn set_on_complete(&mut self, f: impl FnMut(&TimerState) + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    pub fn duration(&self) -> u64 {
        self.counter.duration()
    }

    pub fn count(&self) -> u64 {
        self.counter.count()
    }

    pub fn is_on(&self) -> bool {
        self.counter.is_on()
    }

    pub fn is_completed(&self) -> bool {
        self.counter.is_completed()
    }

    pub fn progress_ratio(&self) -> f64 {
        self.counter.progress_ratio()
    }

    /// The progress ratio mapped through an easing curve.
    pub fn eased_ratio(&self, ease: Ease) -> f64 {
        ease.apply(self.counter.progress_ratio())
    }

    /// Current observable state as a value, for listeners and polling hosts.
    pub fn state(&self) -> TimerState {
        TimerState {
            duration: self.counter.duration(),
            count: self.counter.count(),
            progress_ratio: self.counter.progress_ratio(),
            is_completed: self.counter.is_completed(),
        }
    }

    /// Pause or resume without resetting position.
    pub fn set_on(&mut self, on: bool) {
        self.counter.set_on(on);
    }

    pub fn turn_on(&mut self) {
        self.counter.turn_on();
    }

    pub fn turn_off(&mut self) {
        self.counter.turn_off();
    }

    /// Advance one frame, firing listeners on an effective step.
    pub fn step(&mut self) -> StepResult {
        let result = self.counter.step();
        if result.progressed {
            let state = self.state();
            if let Some(f) = self.on_progress.as_mut() {
                f(&state);
            }
            if result.completed {
                if let Some(f) = self.on_complete.as_mut() {
                    f(&state);
                }
            }
        }
        result
    }

    /// Back to frame zero; listeners stay attached and may fire again.
    pub fn reset(&mut self) {
        self.counter.reset();
    }
}

impl Steppable for Timer {
    fn step(&mut self) -> StepResult {
        Timer::step(self)
    }

    fn reset(&mut self) {
        Timer::reset(self)
    }

    fn is_completed(&self) -> bool {
        Timer::is_completed(self)
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("counter", &self.counter)
            .field("on_progress", &self.on_progress.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
