//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ViewConfig`]       – viewport size and scale, consumed only by the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   h0: 86400.0             # step size, seconds (one day)
//!   g: 6.67428e-11          # gravitational constant
//!
//! view:
//!   width: 800.0            # viewport width, pixels
//!   height: 800.0           # viewport height, pixels
//!   au_pixels: 200.0        # pixels per astronomical unit
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]       # position, meters
//!     m: 1.98892e30         # mass, kg
//!     radius: 30.0          # drawn radius, pixels
//!     color: [ 255, 255, 0 ]
//!     primary: true
//!   - x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]   # velocity, m/s (defaults to rest)
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 100, 149, 237 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; the view section never reaches the physics engine.

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::simulation::params;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_h0")]
    pub h0: f64, // step size in simulated seconds, default one day
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: default_h0(),
            g: default_g(),
        }
    }
}

fn default_h0() -> f64 {
    params::TIMESTEP
}

fn default_g() -> f64 {
    params::G
}

/// Presentation settings for the viewer: viewport size and the
/// simulation-to-screen scale. The mapping is
/// `screen = position * scale() + viewport/2` with the origin at the
/// viewport center.
#[derive(Deserialize, Debug, Clone, Resource)]
pub struct ViewConfig {
    #[serde(default = "default_extent")]
    pub width: f32, // viewport width in pixels
    #[serde(default = "default_extent")]
    pub height: f32, // viewport height in pixels
    #[serde(default = "default_au_pixels")]
    pub au_pixels: f64, // how many pixels one astronomical unit spans
}

impl ViewConfig {
    /// Pixels per meter.
    pub fn scale(&self) -> f64 {
        self.au_pixels / params::AU
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            au_pixels: default_au_pixels(),
        }
    }
}

fn default_extent() -> f32 {
    800.0
}

fn default_au_pixels() -> f64 {
    200.0
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position in meters
    #[serde(default)]
    pub v: [f64; 2], // initial velocity in m/s, defaults to rest
    pub m: f64,      // mass in kg, must be strictly positive
    pub radius: f32, // drawn radius in pixels, visual only
    pub color: [u8; 3], // drawn color, rgb
    #[serde(default)]
    pub primary: bool, // at most one body per scenario may set this
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical parameters
    #[serde(default)]
    pub view: ViewConfig, // viewer-only presentation settings
    pub bodies: Vec<BodyConfig>, // initial state of the system
}
