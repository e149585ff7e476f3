// Domain layer: document kinds, check outcomes and the validator port. No I/O here.

pub mod model;
pub mod ports;
