pub mod ports;
pub mod workflow;

pub use workflow::{PoemWorkflow, WorkflowError};
