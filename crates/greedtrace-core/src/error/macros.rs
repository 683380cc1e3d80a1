//! Error macros for greedtrace

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GreedError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid number errors
#[macro_export]
macro_rules! bail_invalid_number {
    ($token:expr) => {
        return Err($crate::error::GreedError::invalid_number($token))
    };
}
