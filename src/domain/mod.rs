// Domain layer: core models and ports (interfaces). No dependencies beyond std.

pub mod model;
pub mod ports;
