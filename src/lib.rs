//! Tickflow sequences animation phases in frame units.
//!
//! A host sketch creates [`Timer`]s and [`TimerChain`]s, registers them in a
//! [`TimerSet`], and calls `step()` exactly once per animation frame before
//! its draw pass reads any state the timers drive. Durations are integer
//! frame counts; wall-clock compensation is the host's responsibility.
//!
//! Everything is single-threaded and synchronous: a `step()` call finishes
//! within the frame, completion is reported both through the returned
//! [`StepResult`] and through optional listeners, and a completed component
//! ignores further steps until it is reset.
#![forbid(unsafe_code)]

pub mod chain;
pub mod counter;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod set;
pub mod step;
pub mod timer;

pub use chain::TimerChain;
pub use counter::FrameCounter;
pub use dsl::{SequenceSpec, TimerSpec, cycle, phases, sequence_from_json};
pub use ease::Ease;
pub use error::{TickflowError, TickflowResult};
pub use set::TimerSet;
pub use step::{Drawable, StepResult, Steppable};
pub use timer::{Timer, TimerState};
