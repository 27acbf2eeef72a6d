use crate::{
    error::{TickflowError, TickflowResult},
    step::{StepResult, Steppable},
    timer::Timer,
};

/// An ordered sequence of [`Timer`]s played one after another.
///
/// Exactly one timer is current at any time and `step()` delegates to it
/// alone, so units run sequentially, never in parallel. Completion of the
/// current unit advances the index without stepping the next unit on the
/// same frame. When the last unit completes, a looped chain resets every
/// unit and starts over at index 0 with the new current unit at frame zero;
/// a non-looped chain stays terminal with `current` pointing at the
/// finished last unit, and further steps are no-ops.
///
/// The chain-level [`StepResult`] reports `completed` when the last unit of
/// a non-looped chain finishes, and once per full cycle of a looped chain.
#[derive(Debug)]
pub struct TimerChain {
    timers: Vec<Timer>,
    current_index: usize,
    looped: bool,
}

impl TimerChain {
    /// Build a chain from at least one timer. An empty list is rejected.
    pub fn new(timers: Vec<Timer>, looped: bool) -> TickflowResult<Self> {
        if timers.is_empty() {
            return Err(TickflowError::validation(
                "TimerChain requires at least one timer",
            ));
        }
        Ok(Self {
            timers,
            current_index: 0,
            looped,
        })
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The unit `step()` currently delegates to.
    pub fn current(&self) -> &Timer {
        &self.timers[self.current_index]
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    /// Terminal state: non-looped and the last unit has completed.
    pub fn is_completed(&self) -> bool {
        !self.looped
            && self.current_index == self.timers.len() - 1
            && self.timers[self.current_index].is_completed()
    }

    /// Step the current unit; advance (or wrap) when it completes.
    pub fn step(&mut self) -> StepResult {
        let last = self.timers.len() - 1;
        let result = self.timers[self.current_index].step();
        if !result.completed {
            return StepResult {
                progressed: result.progressed,
                completed: false,
            };
        }

        if self.current_index < last {
            self.current_index += 1;
            StepResult::PROGRESSED
        } else if self.looped {
            self.reset();
            StepResult::COMPLETED
        } else {
            StepResult::COMPLETED
        }
    }

    /// Reset every unit and return to the first.
    pub fn reset(&mut self) {
        for t in &mut self.timers {
            t.reset();
        }
        self.current_index = 0;
    }
}

impl Steppable for TimerChain {
    fn step(&mut self) -> StepResult {
        TimerChain::step(self)
    }

    fn reset(&mut self) {
        TimerChain::reset(self)
    }

    fn is_completed(&self) -> bool {
        TimerChain::is_completed(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_chain_is_rejected() {
        let err = TimerChain::new(Vec::new(), false).unwrap_err();
        assert!(matches!(err, TickflowError::Validation(_)));
    }

    #[test]
    fn two_unit_chain_switches_then_terminates() {
        let mut chain = TimerChain::new(vec![Timer::new(2), Timer::new(3)], false).unwrap();

        chain.step();
        assert_eq!(chain.current_index(), 0);
        chain.step();
        // The first unit completed on step 2; the second is current but
        // has not been stepped this frame.
        assert_eq!(chain.current_index(), 1);
        assert_eq!(chain.current().count(), 0);

        chain.step();
        chain.step();
        let r = chain.step();
        assert_eq!(r, StepResult::COMPLETED);
        assert!(chain.is_completed());

        assert_eq!(chain.step(), StepResult::IDLE);
        assert_eq!(chain.current_index(), 1);
    }

    #[test]
    fn chain_completes_after_sum_of_durations() {
        let mut chain =
            TimerChain::new(vec![Timer::new(1), Timer::new(2), Timer::new(3)], false).unwrap();
        for _ in 0..5 {
            assert!(!chain.is_completed());
            chain.step();
        }
        assert!(!chain.is_completed());
        assert_eq!(chain.step(), StepResult::COMPLETED);
        assert!(chain.is_completed());
    }

    #[test]
    fn looped_single_unit_resets_each_cycle() {
        let completions = Rc::new(RefCell::new(0u32));
        let c = Rc::clone(&completions);
        let timer = Timer::new(2).with_on_complete(move |_| *c.borrow_mut() += 1);
        let mut chain = TimerChain::new(vec![timer], true).unwrap();

        for i in 1..=4u64 {
            let r = chain.step();
            if i % 2 == 0 {
                assert_eq!(r, StepResult::COMPLETED);
                assert_eq!(chain.current().count(), 0);
            } else {
                assert_eq!(chain.current().count(), 1);
            }
        }
        assert_eq!(*completions.borrow(), 2);
        assert!(!chain.is_completed());
    }

    #[test]
    fn looped_chain_wraps_with_all_units_fresh() {
        let mut chain = TimerChain::new(vec![Timer::new(2), Timer::new(3)], true).unwrap();
        for _ in 0..4 {
            assert_eq!(chain.step().completed, false);
        }
        assert_eq!(chain.step(), StepResult::COMPLETED);
        assert_eq!(chain.current_index(), 0);
        for t in chain.timers() {
            assert_eq!(t.count(), 0);
            assert!(!t.is_completed());
        }
    }

    #[test]
    fn reset_restarts_a_terminal_chain() {
        let mut chain = TimerChain::new(vec![Timer::new(1), Timer::new(1)], false).unwrap();
        chain.step();
        chain.step();
        assert!(chain.is_completed());

        chain.reset();
        assert_eq!(chain.current_index(), 0);
        assert!(!chain.is_completed());
        assert_eq!(chain.step(), StepResult::PROGRESSED);
    }
}
