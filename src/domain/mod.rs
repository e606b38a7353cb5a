// Domain layer: reference data models and ports. No HTTP or file system types here.

pub mod model;
pub mod ports;
