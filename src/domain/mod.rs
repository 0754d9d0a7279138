// Domain layer: shared value types and ports. No dependencies beyond serde_json.

pub mod model;
pub mod ports;
