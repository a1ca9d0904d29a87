use std::time::Instant;

use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::{Parameters, G, SCALE_FACTOR};
use crate::simulation::states::{Body, NVec2, System};

/// Deterministic ring of bodies for timing, no rand needed.
fn bench_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 200.0, (i_f * 0.13).cos() * 200.0);

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            m: 1.0e24,
            role: None,
        });
    }

    System { bodies, t: 0.0 }
}

/// Time the O(n^2) step over growing system sizes and print a table.
/// This is where any future spatial acceleration structure would show
/// up first.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 5;

    for n in ns {
        let mut sys = bench_system(n);

        let parameters = Parameters {
            dt: 86_400.0,
            g: G,
            scale_factor: SCALE_FACTOR,
            star_mass: 1.989e30,
            separation_m: 227.9e9,
            seed: 42,
        };

        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            scale_factor: parameters.scale_factor,
        });

        // Warm up
        euler_integrator(&mut sys, &forces, &parameters);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &parameters);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}
