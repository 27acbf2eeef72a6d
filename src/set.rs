use crate::step::{StepResult, Steppable};

/// An unordered bag of independently-running timed components, stepped
/// together once per frame.
///
/// Components are held by value (boxed) and identified only by position;
/// no de-duplication is performed, so adding the same logical component
/// twice means it is stepped twice per frame. Insertion order is stable
/// within a step for reproducibility.
///
/// Hosts call [`TimerSet::step`] exactly once per frame, before any draw
/// pass reads the state the components mutate. That phase separation is
/// the caller's contract; the set does not enforce it.
#[derive(Default)]
pub struct TimerSet {
    components: Vec<Box<dyn Steppable>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Pre-size for an expected number of components; the set still grows.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            components: Vec::with_capacity(hint),
        }
    }

    pub fn add(&mut self, component: impl Steppable + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn add_boxed(&mut self, component: Box<dyn Steppable>) {
        self.components.push(component);
    }

    /// Number of components currently registered, completed or not.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// The "anything still registered" query hosts use to decide whether
    /// to spawn new animation work.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Step every component once, in insertion order. Returns how many
    /// components completed on this step.
    #[tracing::instrument(skip(self))]
    pub fn step(&mut self) -> usize {
        let mut completed = 0;
        for c in &mut self.components {
            if c.step() == StepResult::COMPLETED {
                completed += 1;
            }
        }
        completed
    }

    /// Drop every completed component. O(n), order-preserving.
    pub fn remove_completed(&mut self) {
        self.components.retain(|c| !c.is_completed());
    }

    /// Empty the set without stepping or resetting anything.
    pub fn clear(&mut self) {
        self.components.clear();
    }
}

impl std::fmt::Debug for TimerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSet")
            .field("len", &self.components.len())
            .finish()
    }
}
