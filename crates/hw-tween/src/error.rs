use thiserror::Error;

#[derive(Debug, Error)]
pub enum TweenError {
    #[error("invalid tween duration {0}: must be finite and non-negative")]
    InvalidDuration(f32),

    #[error("looping tween needs a positive duration")]
    ZeroLengthLoop,

    #[error("invalid tween start offset {0}: must be finite and non-negative")]
    InvalidStart(f32),
}

pub type TweenResult<T> = Result<T, TweenError>;
