// Domain layer: page models and the ports the components talk through.

pub mod model;
pub mod ports;
