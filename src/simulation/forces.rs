//! Force / acceleration contributors for the orbit simulation.
//!
//! Acceleration terms implement [`Acceleration`] and are summed per
//! body by [`AccelSet`]. Terms are evaluated one body at a time rather
//! than over the whole system at once: the integrator finishes each
//! body (velocity, stored acceleration, position) before the next
//! body's forces are computed, and a whole-system accumulate would
//! break that ordering contract.

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity today; the trait keeps
/// the set open for additional force laws).
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net acceleration on body `i` (m/s^2), summed over all terms,
    /// evaluated against the system's current positions.
    pub fn net_acceleration(&self, sys: &System, i: usize) -> NVec2 {
        let mut total = NVec2::zeros();
        for term in &self.terms {
            total += term.acceleration_on(sys, i);
        }
        total
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`].
///
/// Implementations return their contribution to body `i`'s
/// acceleration in physical units (m/s^2).
pub trait Acceleration {
    fn acceleration_on(&self, sys: &System, i: usize) -> NVec2;
}

/// All-pairs Newtonian gravity, unsoftened.
///
/// Positions are stored in scaled units; displacements are converted
/// back to meters before the force is evaluated. There is no guard for
/// coincident bodies (r = 0) or zero mass: both produce non-finite
/// accelerations that propagate into the body's state without
/// panicking, and the renderer skips non-finite bodies.
pub struct NewtonianGravity {
    pub g: f64,            // gravitational constant
    pub scale_factor: f64, // meters per stored position unit
}

impl Acceleration for NewtonianGravity {
    fn acceleration_on(&self, sys: &System, i: usize) -> NVec2 {
        let bi = &sys.bodies[i];
        let mut total = NVec2::zeros();

        for (j, bj) in sys.bodies.iter().enumerate() {
            if j == i {
                continue;
            }

            // Displacement from i to j, back in meters.
            let d = (bj.x - bi.x) * self.scale_factor;
            let r = d.norm();

            // F = G m_i m_j / r^2, then a_i = F (d/r) / m_i. The mass
            // cancellation is left to the floats to keep the arithmetic
            // identical to the reference step ordering.
            let f = self.g * bi.m * bj.m / (r * r);
            total += f * (d / r) / bi.m;
        }

        total
    }
}
