//! opsuite library
//!
//! Generates JUnit test classes that compare an integer operator applied at
//! `int` width against the same operator applied at `long` width and
//! truncated back, for every `int` value and every operand 2^1 ..= 2^30.

pub mod codegen;
pub mod error;
pub mod generator;
pub mod plan;
pub mod range;

// Re-export commonly used types
pub use codegen::{CodeGenerator, JavaInt};
pub use error::{GenError, GenResult};
pub use generator::{generate, GenerationPipeline};
pub use plan::{InvocationParams, MissingInputPolicy, SuitePlan, TestCase};
pub use range::{narrow_values, NarrowInt, NarrowValues};
