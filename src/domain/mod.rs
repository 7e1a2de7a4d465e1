// Domain layer: value objects and the sender port. No I/O here.

pub mod model;
pub mod ports;
