// Domain layer: record model, collection, and the persistence port.

pub mod model;
pub mod ports;
pub mod roster;
