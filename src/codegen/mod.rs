//! Java source generation for suite plans.
//!
//! The generator emits a JUnit 3 test class; one method per planned case.

pub mod code_generator;
pub mod types;

pub use code_generator::CodeGenerator;
pub use types::JavaInt;
