use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    /// Both precisions, in emission order.
    pub const ALL: [Precision; 2] = [Precision::Double, Precision::Single];

    /// C type keyword.
    pub fn ty(self) -> &'static str {
        match self {
            Precision::Single => "float",
            Precision::Double => "double",
        }
    }

    /// Suffix appended to a catalog name to form the exported wrapper name.
    pub fn vector_suffix(self) -> &'static str {
        match self {
            Precision::Single => "fv",
            Precision::Double => "v",
        }
    }

    /// Suffix appended to a catalog name to form the scalar function name.
    pub fn scalar_suffix(self) -> &'static str {
        match self {
            Precision::Single => "f",
            Precision::Double => "",
        }
    }

    /// Comment heading the batch of wrappers for this precision.
    pub fn banner(self) -> &'static str {
        match self {
            Precision::Single => "// Single Precision",
            Precision::Double => "// Double Precision",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty())
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(Precision::Single),
            "double" => Ok(Precision::Double),
            other => Err(Error::UnknownPrecision(other.to_string())),
        }
    }
}
