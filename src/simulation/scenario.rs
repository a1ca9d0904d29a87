//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle (`Scenario`) containing:
//! - runtime engine options (`Engine`)
//! - physical parameters (`Parameters`)
//! - seeded system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by
//! the integration and visualization systems. Reseeding (a separation
//! change or a reset click) replaces the whole `System`, never
//! individual bodies.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ConfigError, DistributionConfig, ScenarioConfig};
use crate::simulation::engine::{Engine, Population, RadialDistribution, SecondCluster};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::{Parameters, G, SCALE_FACTOR};
use crate::simulation::sampler::{circular_orbit_speed, standard_normal, tangential_velocity};
use crate::simulation::states::{Body, BodyRole, NVec2, System};

use std::f64::consts::PI;

/// Planet A orbital radius, meters.
const PLANET_A_ORBIT_M: f64 = 147.1e9;
/// Planet A mass, kg.
const PLANET_A_MASS: f64 = 5.972e24;
/// Planet B mass, kg.
const PLANET_B_MASS: f64 = 6.417e23;

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// This is the main runtime bundle constructed from a
/// [`ScenarioConfig`]: engine options, parameters, current system
/// state, and the set of active force laws.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate the config, map it into runtime structs, and seed the
    /// initial system.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            g: G,
            scale_factor: SCALE_FACTOR,
            star_mass: p_cfg.star_mass,
            separation_m: p_cfg.separation_m,
            seed: p_cfg.seed,
        };

        // Engine (runtime) from PopulationConfig + RenderConfig
        let pop_cfg = &cfg.population;
        let distribution = match pop_cfg.distribution {
            DistributionConfig::Uniform => RadialDistribution::Uniform {
                min_m: pop_cfg.radial_range[0],
                max_m: pop_cfg.radial_range[1],
            },
            DistributionConfig::Gaussian => RadialDistribution::Gaussian {
                // validate() guarantees the mean is present
                mean_m: pop_cfg.radial_mean_m.unwrap_or(0.0),
                spread_m: pop_cfg.radial_spread_m,
            },
        };
        let second_cluster = (pop_cfg.second_cluster_count > 0).then(|| SecondCluster {
            count: pop_cfg.second_cluster_count,
            spread_m: pop_cfg.second_cluster_spread_m,
        });
        let engine = Engine {
            population: Population {
                count: pop_cfg.count,
                distribution,
                mass_range: pop_cfg.mass_range,
                second_cluster,
            },
            vector_overlay: cfg.render.vector_overlay,
            mass_radius_scaling: cfg.render.mass_radius_scaling,
            min_radius: cfg.render.min_radius,
            radius_scale: cfg.render.radius_scale,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            scale_factor: parameters.scale_factor,
        });

        let system = seed_system(&parameters, &engine);

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Replace the whole system with a freshly seeded one. Each reset
    /// advances the seed so the population is drawn anew, while the
    /// sequence of populations stays a pure function of the configured
    /// seed and the number of resets.
    pub fn reseed(&mut self) {
        self.parameters.seed = self.parameters.seed.wrapping_add(1);
        self.system = seed_system(&self.parameters, &self.engine);
    }

    /// Change planet B's orbital radius and reseed. Rejects non-finite
    /// or non-positive separations before touching the system.
    pub fn set_separation(&mut self, separation_m: f64) -> Result<(), ConfigError> {
        if !separation_m.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "parameters.separation_m",
                value: separation_m,
            });
        }
        if separation_m <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "parameters.separation_m",
                value: separation_m,
            });
        }
        self.parameters.separation_m = separation_m;
        self.reseed();
        Ok(())
    }
}

/// Body on a circular orbit about the star: polar position converted
/// to scaled units, counter-clockwise tangential velocity at the
/// circular-orbit speed for `r_m`.
fn orbiting_body(params: &Parameters, r_m: f64, angle: f64, mass: f64) -> Body {
    let speed = circular_orbit_speed(params.g, params.star_mass, r_m);
    Body {
        x: NVec2::new(r_m * angle.cos(), r_m * angle.sin()) / params.scale_factor,
        v: tangential_velocity(angle, speed),
        a: NVec2::zeros(),
        m: mass,
        role: None,
    }
}

/// Seed a complete system: the three named bodies followed by the
/// random population. Deterministic for a given `params.seed`.
pub fn seed_system(params: &Parameters, engine: &Engine) -> System {
    let pop = &engine.population;
    let total = 3
        + pop.count
        + pop.second_cluster.as_ref().map_or(0, |c| c.count);
    let mut bodies = Vec::with_capacity(total);

    // Star at the origin.
    bodies.push(Body {
        x: NVec2::zeros(),
        v: NVec2::zeros(),
        a: NVec2::zeros(),
        m: params.star_mass,
        role: Some(BodyRole::Star),
    });

    // The two named planets start on the +x axis moving in -y, i.e.
    // clockwise, at the circular-orbit speed for their radius.
    let a_speed = circular_orbit_speed(params.g, params.star_mass, PLANET_A_ORBIT_M);
    bodies.push(Body {
        x: NVec2::new(PLANET_A_ORBIT_M / params.scale_factor, 0.0),
        v: NVec2::new(0.0, -a_speed),
        a: NVec2::zeros(),
        m: PLANET_A_MASS,
        role: Some(BodyRole::PlanetA),
    });

    let b_speed = circular_orbit_speed(params.g, params.star_mass, params.separation_m);
    let planet_b_x = NVec2::new(params.separation_m / params.scale_factor, 0.0);
    bodies.push(Body {
        x: planet_b_x,
        v: NVec2::new(0.0, -b_speed),
        a: NVec2::zeros(),
        m: PLANET_B_MASS,
        role: Some(BodyRole::PlanetB),
    });

    let mut rng = StdRng::seed_from_u64(params.seed);

    // Field population around the star.
    for _ in 0..pop.count {
        let r_m = match pop.distribution {
            RadialDistribution::Uniform { min_m, max_m } => rng.gen_range(min_m..max_m),
            // The normal draw can land negative; folding it keeps the
            // radius positive without biasing the angle.
            RadialDistribution::Gaussian { mean_m, spread_m } => {
                (mean_m + standard_normal(&mut rng) * spread_m).abs()
            }
        };
        let angle = rng.gen_range(0.0..2.0 * PI);
        let mass = rng.gen_range(pop.mass_range[0]..pop.mass_range[1]);
        bodies.push(orbiting_body(params, r_m, angle, mass));
    }

    // Second population clustered around planet B. Each body keeps a
    // circular-orbit velocity about the star for wherever its offset
    // lands it.
    if let Some(cluster) = &pop.second_cluster {
        for _ in 0..cluster.count {
            let offset_m = NVec2::new(
                standard_normal(&mut rng) * cluster.spread_m,
                standard_normal(&mut rng) * cluster.spread_m,
            );
            let pos_m = planet_b_x * params.scale_factor + offset_m;
            let r_m = pos_m.norm();
            let angle = pos_m.y.atan2(pos_m.x);
            let mass = rng.gen_range(pop.mass_range[0]..pop.mass_range[1]);
            bodies.push(orbiting_body(params, r_m, angle, mass));
        }
    }

    System { bodies, t: 0.0 }
}
