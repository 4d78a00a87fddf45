// ============================================================================
// Interfaces Module
// Trait seams between the engine facade and its arithmetic implementations
// ============================================================================

mod backend;

pub use backend::{ArithmeticBackend, BackendKind, EngineConfig};
