//! Core state types for the orbit simulation.
//!
//! Defines the per-body state (`Body`), role tags for the named seeded
//! bodies (`BodyRole`), and the full mutable simulation state (`System`)
//! that the integrator advances in place.
//!
//! Positions are stored in rendering-scaled units (1 unit = 1e9 m, see
//! `params::SCALE_FACTOR`); velocities and accelerations are in true
//! physical units (m/s, m/s^2).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Tag for the deterministically seeded bodies.
///
/// The named bodies used to sit at fixed indices 0/1/2; lookups go
/// through [`System::body_with_role`] instead so the seeding order can
/// change without silently breaking callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Star,
    PlanetA,
    PlanetB,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position, scaled units
    pub v: NVec2, // velocity, m/s
    pub a: NVec2, // acceleration applied on the most recent step, m/s^2
    pub m: f64,   // mass, kg; fixed at creation
    pub role: Option<BodyRole>, // None for the random field population
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // replaced wholesale on reseed
    pub t: f64,            // simulated time, seconds
}

impl System {
    pub fn body_with_role(&self, role: BodyRole) -> Option<&Body> {
        self.bodies.iter().find(|b| b.role == Some(role))
    }

    pub fn star(&self) -> Option<&Body> {
        self.body_with_role(BodyRole::Star)
    }

    pub fn planet_a(&self) -> Option<&Body> {
        self.body_with_role(BodyRole::PlanetA)
    }

    pub fn planet_b(&self) -> Option<&Body> {
        self.body_with_role(BodyRole::PlanetB)
    }
}
