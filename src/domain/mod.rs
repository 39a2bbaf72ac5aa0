// Domain layer: bundle model and the ports the relocator is written against.

pub mod model;
pub mod ports;
