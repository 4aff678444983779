mod stage;
mod state;

pub use stage::{Action, Stage};
pub use state::PipelineState;
