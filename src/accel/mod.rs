// ============================================================================
// Acceleration Module
// Optional bignum-backed arithmetic adapter
// ============================================================================
//
// Enabled by the `accel` feature. The adapter is stateless and thread-safe,
// and must reproduce the longhand results exactly — the equivalence property
// tests in lib.rs hold both implementations to the same contract.

mod bigint;

pub use bigint::BigIntBackend;
