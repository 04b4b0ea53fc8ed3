//! Command executor adapters.

mod recording;
mod system;

pub use recording::RecordingExecutor;
pub use system::SystemExecutor;
