pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spring stiffness must be positive and finite, got {0}")]
    Stiffness(f32),

    #[error("spring damping must be non-negative and finite, got {0}")]
    Damping(f32),

    #[error("max frame dt must be positive and finite, got {0}")]
    MaxDt(f32),

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
}
