// Domain layer: core models and ports (interfaces). No adapter dependencies.

pub mod model;
pub mod ports;
