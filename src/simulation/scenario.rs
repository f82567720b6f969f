//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, empty trails)
//! - the active force law (`NewtonianGravity`)
//!
//! Construction validates the body set: masses must be strictly positive,
//! at most one body may be flagged primary, and no two bodies may start at
//! the same position. Invalid configurations are rejected up front; nothing
//! is corrected mid-run.
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer, which calls [`Scenario::advance`] once per frame.

use bevy::prelude::Resource;
use thiserror::Error;

use crate::configuration::config::{ScenarioConfig, BodyConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Body, NVec2};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::semi_implicit_euler;

/// Configuration rejected at scenario construction.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("body {index} has non-positive mass {mass} kg")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("bodies {first} and {second} are both flagged primary; at most one is allowed")]
    MultiplePrimaries { first: usize, second: usize },

    #[error("bodies {first} and {second} start at the same position; bodies must be strictly separated")]
    CoincidentBodies { first: usize, second: usize },
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the runtime bundle constructed from a [`ScenarioConfig`]: it
/// contains the numerical parameters, current system state, and the force
/// law. The viewer reads body state between steps and never mutates it;
/// all mutation goes through [`Scenario::advance`].
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors.
        // Trails start empty; the first entry appears after the first step.
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            radius: bc.radius,
            color: bc.color,
            primary: bc.primary,
            distance_to_primary: 0.0,
            trail: Vec::new(),
        }).collect();

        validate_bodies(&bodies)?;

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            g: p_cfg.g,
        };

        let gravity = NewtonianGravity {
            g: parameters.g,
        };

        Ok(Self {
            parameters,
            system,
            gravity,
        })
    }

    /// Advance the simulation by one fixed step. The single driving
    /// operation exposed to the host loop; called once per frame tick.
    pub fn advance(&mut self) {
        semi_implicit_euler(&mut self.system, &self.gravity, &self.parameters);
    }
}

fn validate_bodies(bodies: &[Body]) -> Result<(), ScenarioError> {
    for (i, b) in bodies.iter().enumerate() {
        if b.m <= 0.0 {
            return Err(ScenarioError::NonPositiveMass { index: i, mass: b.m });
        }
    }

    if let Some(first) = bodies.iter().position(|b| b.primary) {
        if let Some(rest) = bodies[first + 1..].iter().position(|b| b.primary) {
            return Err(ScenarioError::MultiplePrimaries {
                first,
                second: first + 1 + rest,
            });
        }
    }

    // Coincident bodies would divide by zero in the force law
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if bodies[i].x == bodies[j].x {
                return Err(ScenarioError::CoincidentBodies { first: i, second: j });
            }
        }
    }

    Ok(())
}
