//! Simulated robot for exercising the localizer.
//!
//! The simulation keeps the robot's true cell, produces noisy color
//! readings and noisy motion from it, and feeds both into a [`Localizer`].
//! Noise follows the filter's own model:
//!
//! - a reading is wrong with probability `p_miss / (p_hit + p_miss)`; a wrong
//!   reading reports a different color from the world's palette
//! - after each commanded move the robot slips one extra cell in a random
//!   direction with probability `blurring`
//!
//! The random generator is always seeded so runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FilterConfig;
use crate::core::{Color, Displacement, GridCoord};
use crate::error::Result;
use crate::grid::ColorGrid;
use crate::modes::Localizer;

const SLIPS: [Displacement; 4] = [
    Displacement::UP,
    Displacement::DOWN,
    Displacement::LEFT,
    Displacement::RIGHT,
];

/// A robot moving on a known world, tracked by a [`Localizer`].
#[derive(Debug)]
pub struct Simulation {
    position: GridCoord,
    palette: Vec<Color>,
    incorrect_sense_probability: f64,
    slip_probability: f64,
    rng: StdRng,
    localizer: Localizer,
}

impl Simulation {
    /// Place the robot at `start` (wrapped onto the torus).
    pub fn new(
        world: ColorGrid,
        start: GridCoord,
        config: FilterConfig,
        seed: u64,
    ) -> Result<Self> {
        let shape = world.shape();
        let position = GridCoord::new(start.row % shape.height, start.col % shape.width);
        let palette = world.colors();
        let incorrect_sense_probability = config.sensor.error_probability();
        let slip_probability = config.motion.blurring;
        let localizer = Localizer::new(world, config)?;

        Ok(Self {
            position,
            palette,
            incorrect_sense_probability,
            slip_probability,
            rng: StdRng::seed_from_u64(seed),
            localizer,
        })
    }

    /// Take a (possibly wrong) reading at the true position and feed it to
    /// the localizer. Returns the reported color.
    pub fn sense(&mut self) -> Result<Color> {
        let truth = self.true_color();
        let reported = if self.rng.random::<f64>() < self.incorrect_sense_probability {
            self.wrong_color(truth)
        } else {
            truth
        };
        if reported != truth {
            log::trace!("Sensor misread '{truth}' as '{reported}' at {}", self.position);
        }
        self.localizer.sense(reported)?;
        Ok(reported)
    }

    /// Command a move: the robot moves (maybe slipping), the localizer is
    /// told only the intended displacement.
    pub fn move_by(&mut self, displacement: Displacement) -> Result<()> {
        let shape = self.localizer.world().shape();
        let mut actual = displacement;
        if self.rng.random::<f64>() < self.slip_probability {
            let slip = SLIPS[self.rng.random_range(0..SLIPS.len())];
            log::trace!("Robot slipped by ({}, {})", slip.dy, slip.dx);
            actual = actual + slip;
        }
        self.position = self.position.wrapping_offset(actual, shape);
        self.localizer.move_by(displacement)?;
        Ok(())
    }

    /// Sense then move for every displacement in `moves`.
    pub fn run(&mut self, moves: &[Displacement]) -> Result<()> {
        for &d in moves {
            self.sense()?;
            self.move_by(d)?;
        }
        Ok(())
    }

    /// Where the robot really is
    pub fn true_position(&self) -> GridCoord {
        self.position
    }

    /// Color under the robot
    pub fn true_color(&self) -> Color {
        self.localizer
            .world()
            .get(self.position)
            .unwrap_or(self.palette[0])
    }

    /// Does the localizer's best guess match the true position?
    pub fn is_localized(&self) -> bool {
        self.localizer.estimate().coord == self.position
    }

    /// The tracking localizer
    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    fn wrong_color(&mut self, truth: Color) -> Color {
        let others: Vec<Color> = self
            .palette
            .iter()
            .copied()
            .filter(|&c| c != truth)
            .collect();
        if others.is_empty() {
            truth
        } else {
            others[self.rng.random_range(0..others.len())]
        }
    }
}
