use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Missing required input '{required}' for stage '{stage}'")]
    MissingInput { stage: String, required: String },

    #[error("Missing required output '{required}' for stage '{stage}'")]
    MissingOutput { stage: String, required: String },

    #[error("Pipeline configuration error: {message}")]
    ConfigError { message: String },
}
