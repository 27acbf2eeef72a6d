/// Outcome of a single `step()` call on a timed component.
///
/// `completed` is true only on the step that transitions the component into
/// its completed state, so a caller polling results sees completion exactly
/// once per cycle without tracking edges itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepResult {
    /// The step had an effect (the component was on and not yet completed).
    pub progressed: bool,
    /// This step was the completing one.
    pub completed: bool,
}

impl StepResult {
    /// The step was a no-op (paused or already completed).
    pub const IDLE: Self = Self {
        progressed: false,
        completed: false,
    };

    /// The step advanced the component without completing it.
    pub const PROGRESSED: Self = Self {
        progressed: true,
        completed: false,
    };

    /// The step advanced the component into its completed state.
    pub const COMPLETED: Self = Self {
        progressed: true,
        completed: true,
    };
}

/// A component advanced one frame at a time by the host's animation loop.
pub trait Steppable {
    /// Advance by one frame. Must be a no-op once completed.
    fn step(&mut self) -> StepResult;

    /// Return to the initial (frame zero, not completed) state.
    fn reset(&mut self);

    /// Whether the component has reached its terminal state.
    fn is_completed(&self) -> bool;
}

/// A component that renders itself into a host-supplied draw context.
///
/// The context is injected per call; implementors hold no handle to the
/// host environment. Hosts must step all timers before any `draw` reads
/// the state those timers mutate within a frame.
pub trait Drawable<C> {
    fn draw(&self, ctx: &mut C);
}
