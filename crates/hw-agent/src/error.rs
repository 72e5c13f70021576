use hw_core::AgentId;
use hw_tween::TweenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),

    #[error("{0} was already started")]
    AlreadyStarted(AgentId),

    #[error("tween request rejected: {0}")]
    Tween(#[from] TweenError),
}

pub type AgentResult<T> = Result<T, AgentError>;
