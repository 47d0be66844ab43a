use thiserror::Error;

/// Reasons a [`FieldParams`](crate::FieldParams) set is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("glyph alphabet is empty")]
    EmptyAlphabet,

    #[error("depth range is empty or negative: near={near}, far={far}")]
    InvalidDepthRange { near: f32, far: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("mobile width {mobile} must be below the large tier width {large}")]
    InvalidThresholds { mobile: f32, large: f32 },
}
