// Domain layer: rewrite rules, the run report, and the storage port.

pub mod model;
pub mod ports;
