//! Fluent builder for constructing a [`Sim`].

use std::collections::VecDeque;

use lift_core::{Floor, SimConfig};
use lift_dispatch::{Dispatcher, FloorCallRegistry};
use lift_fleet::LiftFleet;
use lift_motion::MotionController;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floors, lifts, total ticks, door timing, …
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                        |
/// |----------------------|--------------------------------|
/// | `.initial_levels(v)` | All lifts at the ground floor  |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::new(6, 2);
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.handle_call(FloorCall::up(Floor(3)))?;
/// sim.run_ticks(20, &mut NoTraffic, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    levels: Option<Vec<Floor>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            levels: None,
        }
    }

    /// Supply the starting floor of each lift (must be length `lift_count`,
    /// all within the building).
    pub fn initial_levels(mut self, levels: Vec<Floor>) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let lift_count = self.config.lift_count as usize;
        let top_floor = self.config.top_floor();

        let fleet = match self.levels {
            Some(levels) => {
                if levels.len() != lift_count {
                    return Err(SimError::LiftCountMismatch {
                        expected: lift_count,
                        got:      levels.len(),
                        what:     "initial levels",
                    });
                }
                if let Some(&level) = levels.iter().find(|&&level| level > top_floor) {
                    return Err(SimError::Config(format!(
                        "initial level {level} is above the top floor {top_floor}"
                    )));
                }
                LiftFleet::with_levels(levels)
            }
            None => LiftFleet::new(self.config.lift_count),
        };

        Ok(Sim {
            clock:      self.config.make_clock(),
            registry:   FloorCallRegistry::new(self.config.floor_count),
            dispatcher: Dispatcher::new(top_floor),
            motion:     MotionController::new(self.config.door),
            config:     self.config,
            fleet,
            pending:    VecDeque::new(),
        })
    }
}
