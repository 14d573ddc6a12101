use std::fmt;

/// Programmable pipeline stage, used to label compiler diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failures that abort page setup. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("unable to initialize WebGL")]
    ContextUnavailable,
    #[error("failed to create {0} shader")]
    ShaderCreate(ShaderStage),
    #[error("{stage} shader compile failed with: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("failed to create program")]
    ProgramCreate,
    #[error("program link failed with: {0}")]
    ProgramLink(String),
    #[error("failed to create vertex buffer")]
    BufferCreate,
    #[error("cannot find attribute {0}")]
    MissingAttribute(String),
    #[error("cannot find uniform {0}")]
    MissingUniform(String),
}
