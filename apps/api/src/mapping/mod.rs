// Attribute-to-asset mapping engine.
// Pure rules plus lookup tables; all randomness arrives through RandomSource.

pub mod engine;
pub mod random;
pub mod tables;

pub use engine::{derive_card, AttributeInput, EngineOutput};
pub use random::StdRngSource;
