// Domain layer: the registry model and the storage port. No I/O in here.

pub mod model;
pub mod ports;
