pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, G, AU, TIMESTEP};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::scenario::{Scenario, ScenarioError};

pub use configuration::config::{ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;
