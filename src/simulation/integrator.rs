//! Fixed-step time integrator for the orbit simulation.
//!
//! A single semi-implicit Euler variant: each body's velocity is
//! updated from the freshly summed acceleration before its position
//! moves, and each body is finished before the next body's forces are
//! evaluated.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::System;

/// Advance the system by one fixed step of `params.dt` seconds.
///
/// For each body index i in order:
/// 1. sum accelerations over all j != i at the bodies' current
///    positions (bodies before i have already moved this step),
/// 2. `v += a dt`,
/// 3. store `a` on the body (diagnostic, read by the vector overlay),
/// 4. `x += v dt / scale_factor`.
///
/// The per-body read-then-write order is a reproducibility contract:
/// reordering it into a two-phase accumulate changes the trajectory.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.dt;

    for i in 0..n {
        let a = forces.net_acceleration(&*sys, i);

        let b = &mut sys.bodies[i];
        b.v += a * dt;
        b.a = a;
        b.x += b.v * dt / params.scale_factor;
    }

    sys.t += dt;
}
