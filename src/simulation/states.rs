//! Core state types for the planetary simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds the dynamical state (position, velocity, mass) plus the
//!   presentation attributes the viewer reads (radius, color)
//! - `System` holds the list of bodies and the current simulation time `t`
//!
//! Positions are in meters from the reference point at the viewport center,
//! velocities in m/s, masses in kg.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, strictly positive, fixed after construction
    pub radius: f32, // drawn radius in pixels, never enters the force law
    pub color: [u8; 3], // drawn color, rgb
    pub primary: bool, // distinguished body distances are reported against
    pub distance_to_primary: f64, // refreshed each step; stays 0 without a primary
    pub trail: Vec<NVec2>, // one position per completed step, oldest first
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // simulated seconds since start
}

impl System {
    /// Index of the body flagged primary, if one exists.
    pub fn primary_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.primary)
    }
}
