//! Gravitational force model for the planetary engine
//!
//! `NewtonianGravity` computes the bare inverse-square attraction between
//! body pairs, in newtons. There is no softening: `radius` is a drawing
//! attribute and must not enter the force law, and coincident bodies are an
//! unhandled fatal condition (the division by zero propagates as non-finite
//! state; initial conditions must keep all bodies strictly separated).

use crate::simulation::states::{Body, System, NVec2};

/// Newtonian point-mass gravity, F = G m₁ m₂ / r².
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force exerted on `body` by `other`, in newtons.
    ///
    /// The pair must be distinct; callers iterate over distinct pairs so the
    /// self-pair case never reaches this function.
    pub fn attraction(&self, body: &Body, other: &Body) -> NVec2 {
        // r is the displacement vector from `body` to `other`; the pull on
        // `body` points along +r
        let r = other.x - body.x;

        // Squared separation |r|^2
        let r2 = r.dot(&r);

        // 1 / |r| and 1 / |r|^3
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        // F = G m1 m2 / |r|^2 along the unit vector r / |r|, folded into
        // a single multiple of r:
        //   F_vec = G m1 m2 r / |r|^3
        // (identical to decomposing the magnitude with cos/sin of atan2)
        self.g * body.m * other.m * inv_r3 * r
    }

    /// Accumulate the net force on every body in `sys` into `out`.
    /// - `out[i]` is set to the sum over all other bodies, in newtons
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }

        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j; the self-pair
        // i == j cannot occur by construction
        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.attraction(&sys.bodies[i], &sys.bodies[j]);

                // Newton's third law: equal and opposite
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
