//! The fixed, ordered list of scalar functions that get a vector wrapper.
//!
//! Order matters: it is the order in which wrappers appear in the generated
//! unit.

/// Number of input arrays a wrapper takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Which part of the catalog an entry belongs to.
///
/// Only [`Family::Classical`] entries are redirected to their `fast_`
/// counterpart in preload mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    Classical,
    Extended,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: &'static str,
    pub arity: Arity,
    pub family: Family,
}

impl FunctionEntry {
    const fn classical(name: &'static str, arity: Arity) -> Self {
        Self {
            name,
            arity,
            family: Family::Classical,
        }
    }

    const fn extended(name: &'static str, arity: Arity) -> Self {
        Self {
            name,
            arity,
            family: Family::Extended,
        }
    }

    #[inline]
    pub fn is_classical(&self) -> bool {
        self.family == Family::Classical
    }
}

use Arity::{Binary, Unary};

const CLASSICAL_LEN: usize = 10;

static FUNCTIONS: [FunctionEntry; 28] = [
    // libm
    FunctionEntry::classical("exp", Unary),
    FunctionEntry::classical("log", Unary),
    FunctionEntry::classical("sin", Unary),
    FunctionEntry::classical("cos", Unary),
    FunctionEntry::classical("tan", Unary),
    FunctionEntry::classical("tanh", Unary),
    FunctionEntry::classical("asin", Unary),
    FunctionEntry::classical("acos", Unary),
    FunctionEntry::classical("atan", Unary),
    FunctionEntry::classical("atan2", Binary),
    // utilities and fast variants
    FunctionEntry::extended("isqrt", Unary),
    FunctionEntry::extended("inv", Unary),
    FunctionEntry::extended("identity", Unary),
    FunctionEntry::extended("identity2D", Binary),
    FunctionEntry::extended("fast_exp", Unary),
    FunctionEntry::extended("fast_log", Unary),
    FunctionEntry::extended("fast_sin", Unary),
    FunctionEntry::extended("fast_cos", Unary),
    FunctionEntry::extended("fast_tan", Unary),
    FunctionEntry::extended("fast_tanh", Unary),
    FunctionEntry::extended("fast_asin", Unary),
    FunctionEntry::extended("fast_acos", Unary),
    FunctionEntry::extended("fast_atan", Unary),
    FunctionEntry::extended("fast_atan2", Binary),
    FunctionEntry::extended("fast_inv", Unary),
    FunctionEntry::extended("fast_approx_inv", Unary),
    FunctionEntry::extended("fast_isqrt", Unary),
    FunctionEntry::extended("fast_approx_isqrt", Unary),
];

/// The libm-style functions, in emission order.
pub fn classical_functions() -> &'static [FunctionEntry] {
    &FUNCTIONS[..CLASSICAL_LEN]
}

/// The utility and `fast_` functions, in emission order.
pub fn extended_functions() -> &'static [FunctionEntry] {
    &FUNCTIONS[CLASSICAL_LEN..]
}

/// [`classical_functions`] followed by [`extended_functions`].
pub fn all_functions() -> &'static [FunctionEntry] {
    &FUNCTIONS
}

pub fn find(name: &str) -> Option<&'static FunctionEntry> {
    FUNCTIONS.iter().find(|entry| entry.name == name)
}
