pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyRole, NVec2, System};
pub use simulation::params::{Parameters, G, SCALE_FACTOR};
pub use simulation::engine::{Engine, Population, RadialDistribution, SecondCluster};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::{seed_system, Scenario};

pub use configuration::config::{
    ConfigError, DistributionConfig, ParametersConfig, PopulationConfig, RenderConfig,
    ScenarioConfig,
};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
