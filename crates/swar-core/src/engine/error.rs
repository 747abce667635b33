use thiserror::Error;

use crate::core::energy::EnergyError;
use crate::core::io::swar::SchemaError;
use crate::core::models::graph::GraphError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Schema could not be read: {source}")]
    Schema {
        #[from]
        source: SchemaError,
    },

    #[error("Invalid graph: {source}")]
    Graph {
        #[from]
        source: GraphError,
    },

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyError,
    },
}
