// Domain layer: talent records and the ports the directory depends on.

pub mod model;
pub mod ports;
