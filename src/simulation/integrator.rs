//! Fixed-step time integrator for the planetary system
//!
//! Provides a semi-implicit (symplectic) Euler integrator driven by
//! `NewtonianGravity` and `Parameters`: one force evaluation per step,
//! velocity updated from current acceleration, position from the
//! just-updated velocity.

use super::states::{System, NVec2};
use super::forces::NewtonianGravity;
use super::params::Parameters;

/// Advance the system by one step of `params.h0` seconds using
/// semi-implicit Euler. Updates positions, velocities, trails,
/// per-body primary distances, and `sys.t` in place.
pub fn semi_implicit_euler(sys: &mut System, gravity: &NewtonianGravity, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt

    // Allocate a force buffer, one entry per body, and fill it from the
    // unmutated pre-step state. Every body's net force comes from the same
    // snapshot, so the result is independent of iteration order.
    let mut forces = vec![NVec2::zeros(); n];
    gravity.accumulate_forces(&*sys, &mut forces);

    // For each body and its net force f:
    // kick:  v_n+1 = v_n + (f / m) dt
    // drift: x_n+1 = x_n + v_n+1 dt   (uses the just-updated velocity)
    // then record the new position in the trail
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        b.v += *f / b.m * dt;
        b.x += b.v * dt;
        b.trail.push(b.x);
    }

    // Increment the system time by one full step
    sys.t += dt;

    refresh_primary_distances(sys);
}

/// Recompute `distance_to_primary` for every non-primary body from the
/// post-step positions. No-op when no body is flagged primary.
fn refresh_primary_distances(sys: &mut System) {
    let Some(p) = sys.primary_index() else {
        return;
    };
    let px = sys.bodies[p].x;

    for (i, b) in sys.bodies.iter_mut().enumerate() {
        if i != p {
            b.distance_to_primary = (b.x - px).norm();
        }
    }
}
