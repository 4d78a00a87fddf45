// ============================================================================
// Engine Factory
// Creates decimal engines with proper configuration
// ============================================================================

use crate::engine::{DecimalEngine, LonghandBackend};
use crate::interfaces::{ArithmeticBackend, BackendKind, EngineConfig};

/// Creates a decimal engine from configuration
///
/// # Arguments
/// * `config` - Precision and backend selection
///
/// # Returns
/// * `Result<DecimalEngine, String>` - Configured engine or error
///
/// # Example
/// ```ignore
/// use decimal_engine::prelude::*;
///
/// let config = EngineConfig::default().with_precision(2);
/// let engine = create_from_config(config).unwrap();
/// ```
pub fn create_from_config(config: EngineConfig) -> Result<DecimalEngine, String> {
    let backend: Box<dyn ArithmeticBackend> = match config.backend {
        BackendKind::Longhand => Box::new(LonghandBackend),

        #[cfg(feature = "accel")]
        BackendKind::Accelerated => Box::new(crate::accel::BigIntBackend),

        #[cfg(not(feature = "accel"))]
        BackendKind::Accelerated => {
            return Err("accelerated backend requires the `accel` feature".to_string());
        },
    };

    Ok(DecimalEngine::new(backend, config.precision))
}
