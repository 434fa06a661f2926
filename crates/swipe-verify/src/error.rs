#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidButtonSize { size: f32 },
    InvalidBorderRadius { radius: f32 },
    InvalidDuration { name: &'static str, millis: u64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidButtonSize { size } => {
                write!(f, "button size must be a positive finite number, got {size}")
            }
            ConfigError::InvalidBorderRadius { radius } => {
                write!(f, "border radius must be finite and non-negative, got {radius}")
            }
            ConfigError::InvalidDuration { name, millis } => {
                write!(f, "{name} duration of {millis}ms is out of range")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
