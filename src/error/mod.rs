/// Centralized error handling for seqpipe
pub mod pipeline;
pub mod seqpipe;

pub use pipeline::PipelineError;
pub use seqpipe::{Result, SeqPipeError};
