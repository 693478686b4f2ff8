// wrappers for every catalog function, in double then single precision
// classical functions can be redirected to their fast_ variants (preload)

pub mod catalog;
pub mod emit;
pub mod error;
pub mod precision;
pub mod signature;

pub use catalog::{Arity, Family, FunctionEntry};
pub use emit::{codegen_batch, codegen_unit, write_unit, VECTOR_HEADER, VECTOR_IMPL};
pub use error::{Error, Result};
pub use precision::Precision;
pub use signature::{synthesize, VectorSignature, RESTRICT};
