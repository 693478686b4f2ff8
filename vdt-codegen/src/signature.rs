//! Per-function wrapper synthesis.
//!
//! A [`VectorSignature`] is fully determined by a catalog entry, a precision
//! and the preload flag. Its [`Display`] impl renders the declaration line
//! followed by the loop body.

use std::fmt::Display;

use crate::catalog::{self, Arity, FunctionEntry};
use crate::{Error, Precision, Result};

/// Non-aliasing annotation on every pointer parameter. Callers must not pass
/// an output buffer that overlaps an input.
pub const RESTRICT: &str = "__restrict__";

const FAST_PREFIX: &str = "fast_";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VectorSignature {
    pub entry: &'static FunctionEntry,
    pub precision: Precision,
    pub preload: bool,
}

/// The `void name(...)` line of a wrapper.
pub struct Declaration<'a>(&'a VectorSignature);

/// The braced loop of a wrapper, including the trailing blank line.
pub struct Body<'a>(&'a VectorSignature);

impl VectorSignature {
    pub fn new(entry: &'static FunctionEntry, precision: Precision, preload: bool) -> Self {
        Self {
            entry,
            precision,
            preload,
        }
    }

    /// Name of the generated wrapper, e.g. `expv` or `atan2fv`.
    pub fn vector_name(&self) -> String {
        format!("{}{}", self.entry.name, self.precision.vector_suffix())
    }

    /// Name of the scalar function called per element.
    ///
    /// In preload mode classical entries call their `fast_` counterpart.
    /// Extended entries are never rewritten.
    pub fn impl_name(&self) -> String {
        let scalar = format!("{}{}", self.entry.name, self.precision.scalar_suffix());
        if self.preload && self.entry.is_classical() {
            format!("{FAST_PREFIX}{scalar}")
        } else {
            scalar
        }
    }

    pub fn arity(&self) -> Arity {
        self.entry.arity
    }

    pub fn declaration(&self) -> Declaration<'_> {
        Declaration(self)
    }

    pub fn body(&self) -> Body<'_> {
        Body(self)
    }

    /// `(declaration, body)` as owned strings.
    pub fn parts(&self) -> (String, String) {
        (self.declaration().to_string(), self.body().to_string())
    }
}

impl Display for Declaration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sig = self.0;
        let ty = sig.precision.ty();
        let name = sig.vector_name();
        let input = format!("{ty} const * {RESTRICT}");
        let output = format!("{ty}* {RESTRICT}");

        match sig.arity() {
            Arity::Unary => write!(
                f,
                "void {name}(const uint32_t size, {input} iarray, {output} oarray)"
            ),
            Arity::Binary => write!(
                f,
                "void {name}(const uint32_t size, {input} iarray1, {input} iarray2, {output} oarray)"
            ),
        }
    }
}

impl Display for Body<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sig = self.0;
        let impl_name = sig.impl_name();

        write!(f, "{{\n")?;
        write!(f, "  for (uint32_t i=0;i<size;++i)\n")?;
        match sig.arity() {
            Arity::Unary => write!(f, "    oarray[i]={impl_name}(iarray[i]);\n")?,
            Arity::Binary => write!(f, "    oarray[i]={impl_name}(iarray1[i],iarray2[i]);\n")?,
        }
        write!(f, "}}\n")
    }
}

impl Display for VectorSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.declaration(), self.body())
    }
}

/// Builds a signature from a catalog name and a C type keyword.
///
/// Fails on a keyword other than `float`/`double`, or on a name that is not
/// in the catalog. Nothing is rendered on failure.
pub fn synthesize(name: &str, ty: &str, preload: bool) -> Result<VectorSignature> {
    let precision: Precision = ty.parse()?;
    let entry = catalog::find(name).ok_or_else(|| Error::UnknownFunction(name.to_string()))?;
    Ok(VectorSignature::new(entry, precision, preload))
}
