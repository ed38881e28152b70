use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}
