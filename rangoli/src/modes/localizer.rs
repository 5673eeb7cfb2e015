//! Stateful filtering session over a known color map.
//!
//! The filter functions are pure; [`Localizer`] is the thin driver that owns
//! the current belief and feeds each output back in as the next input.
//!
//! # Pipeline
//!
//! ```text
//! Localizer::new(world, config)
//!       │  validate config, uniform belief
//!       ▼
//! ┌─────────────────┐
//! │  sense(color)   │  beliefs = filter::sense(...)
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │  move_by(d)     │  beliefs = filter::move_beliefs(...)
//! └────────┬────────┘
//!          │
//!          └──▶ estimate()  most likely cell + entropy
//! ```
//!
//! A failed update leaves the previous belief in place.

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::core::{Color, Displacement, GridCoord};
use crate::error::Result;
use crate::filter;
use crate::grid::{BeliefGrid, ColorGrid};

/// One event in a filtering session.
///
/// ```yaml
/// - type: sense
///   color: r
/// - type: move
///   dy: 0
///   dx: 1
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Sensor reading
    Sense {
        /// Observed color
        color: Color,
    },
    /// Motion command
    Move {
        /// Row change
        #[serde(default)]
        dy: i64,
        /// Column change
        #[serde(default)]
        dx: i64,
    },
}

impl Step {
    /// Motion step from a displacement
    pub fn moving(d: Displacement) -> Self {
        Step::Move { dy: d.dy, dx: d.dx }
    }
}

/// Summary of the current belief.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// Most probable cell (row-major first on ties)
    pub coord: GridCoord,
    /// Probability of that cell
    pub probability: f64,
    /// Entropy of the whole belief in nats
    pub entropy: f64,
}

/// Histogram localizer for a known world.
///
/// # Usage
///
/// ```rust,ignore
/// use rangoli::{ColorGrid, Color, Displacement, FilterConfig, Localizer};
///
/// let world = ColorGrid::parse("r g g\ng g r")?;
/// let mut localizer = Localizer::new(world, FilterConfig::default())?;
///
/// localizer.sense(Color::RED)?;
/// localizer.move_by(Displacement::RIGHT)?;
/// let estimate = localizer.estimate();
/// ```
#[derive(Clone, Debug)]
pub struct Localizer {
    /// The known world (immutable after creation).
    world: ColorGrid,

    /// Noise parameters.
    config: FilterConfig,

    /// Current belief.
    beliefs: BeliefGrid,

    /// Updates applied since the last reset.
    steps_taken: usize,
}

impl Localizer {
    /// Create a localizer with a uniform prior over `world`.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(world: ColorGrid, config: FilterConfig) -> Result<Self> {
        config.validate()?;
        let beliefs = filter::initialize_beliefs(&world)?;
        log::debug!(
            "Localizer ready: {} world, p_hit={}, p_miss={}, blurring={}",
            world.shape(),
            config.sensor.p_hit,
            config.sensor.p_miss,
            config.motion.blurring
        );
        Ok(Self {
            world,
            config,
            beliefs,
            steps_taken: 0,
        })
    }

    /// Incorporate a color reading.
    pub fn sense(&mut self, color: Color) -> Result<&BeliefGrid> {
        let updated = filter::sense(
            color,
            &self.world,
            &self.beliefs,
            self.config.sensor.p_hit,
            self.config.sensor.p_miss,
        )?;
        self.commit(updated);
        Ok(&self.beliefs)
    }

    /// Incorporate an intended motion.
    pub fn move_by(&mut self, displacement: Displacement) -> Result<&BeliefGrid> {
        let updated =
            filter::move_beliefs(displacement, &self.beliefs, self.config.motion.blurring)?;
        self.commit(updated);
        Ok(&self.beliefs)
    }

    /// Apply one step.
    pub fn step(&mut self, step: Step) -> Result<&BeliefGrid> {
        match step {
            Step::Sense { color } => self.sense(color),
            Step::Move { dy, dx } => self.move_by(Displacement::new(dy, dx)),
        }
    }

    /// Apply steps in order, stopping at the first failure.
    pub fn run(&mut self, steps: &[Step]) -> Result<Estimate> {
        for &step in steps {
            self.step(step)?;
        }
        Ok(self.estimate())
    }

    /// Discard everything learned and return to the uniform prior.
    pub fn reset(&mut self) -> Result<()> {
        self.beliefs = filter::initialize_beliefs(&self.world)?;
        self.steps_taken = 0;
        Ok(())
    }

    /// Current belief
    pub fn beliefs(&self) -> &BeliefGrid {
        &self.beliefs
    }

    /// The known world
    pub fn world(&self) -> &ColorGrid {
        &self.world
    }

    /// Noise parameters
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of successful updates since creation or the last reset
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Summarize the current belief
    pub fn estimate(&self) -> Estimate {
        let coord = self.beliefs.most_likely();
        Estimate {
            coord,
            probability: self.beliefs.get(coord).unwrap_or_default(),
            entropy: self.beliefs.entropy(),
        }
    }

    fn commit(&mut self, updated: BeliefGrid) {
        self.beliefs = updated;
        self.steps_taken += 1;
        let estimate = self.estimate();
        log::debug!(
            "Step {}: most likely {} (p={:.4}, entropy={:.3})",
            self.steps_taken,
            estimate.coord,
            estimate.probability,
            estimate.entropy
        );
    }
}
