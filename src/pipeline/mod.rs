mod driver;
mod errors;

pub use driver::{run, Outcome};
pub use errors::PipelineError;
