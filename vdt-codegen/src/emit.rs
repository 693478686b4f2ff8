//! Assembly of the generated translation unit.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::catalog::all_functions;
use crate::signature::VectorSignature;
use crate::{Error, Precision, Result};

/// Header declaring every scalar function the wrappers call.
pub const VECTOR_HEADER: &str = "vdtMath.h";

/// File name of the generated unit.
pub const VECTOR_IMPL: &str = "vdtMath_signatures.cc";

/// Every catalog function in double precision, then again in single
/// precision, each batch headed by its banner comment.
pub fn codegen_batch(preload: bool) -> Result<String> {
    let mut code = String::new();

    for precision in Precision::ALL {
        tracing::debug!(%precision, preload, "generating batch");
        write!(code, "{}\n", precision.banner())?;
        for entry in all_functions() {
            write!(code, "{}\n", VectorSignature::new(entry, precision, preload))?;
        }
    }

    Ok(code)
}

/// The whole unit: marker comment, include, and the batch inside the
/// `vdt` namespace.
pub fn codegen_unit(preload: bool) -> Result<String> {
    let mut code = String::new();

    write!(code, "// Automatically generated\n\n")?;
    write!(code, "#include \"{VECTOR_HEADER}\"\n\n")?;
    write!(code, "namespace vdt{{\n")?;
    code.push_str(&codegen_batch(preload)?);
    write!(code, "}} // end of vdt namespace\n")?;

    Ok(code)
}

/// Generates the unit and writes it to [`VECTOR_IMPL`] inside `outdir`,
/// replacing any existing file. Returns the path written.
///
/// The text is built in memory before the file is opened, so a failure
/// never leaves half a batch on disk.
pub fn write_unit(preload: bool, outdir: impl AsRef<Path>) -> Result<PathBuf> {
    let code = codegen_unit(preload)?;
    let dest_path = outdir.as_ref().join(VECTOR_IMPL);

    std::fs::write(&dest_path, &code).map_err(|source| Error::Io {
        path: dest_path.clone(),
        source,
    })?;

    tracing::info!(
        path = %dest_path.display(),
        bytes = code.len(),
        preload,
        "wrote vector signatures"
    );
    Ok(dest_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    fn declarations(code: &str) -> Vec<&str> {
        code.lines().filter(|line| line.starts_with("void ")).collect()
    }

    #[test]
    fn test_batch_block_count() {
        for preload in [false, true] {
            let code = codegen_batch(preload).unwrap();
            assert!(declarations(&code).len() == 2 * all_functions().len());
            assert!(code.matches("  for (uint32_t i=0;i<size;++i)\n").count() == 56);
        }
    }

    #[test]
    fn test_batch_double_first() {
        let code = codegen_batch(false).unwrap();
        assert!(code.starts_with("// Double Precision\nvoid expv("));

        let single = code.find("// Single Precision\n").unwrap();
        let (double_half, single_half) = code.split_at(single);
        assert!(declarations(double_half).len() == 28);
        assert!(declarations(single_half).len() == 28);
        assert!(declarations(double_half).iter().all(|d| d.contains("double const *")));
        assert!(declarations(single_half).iter().all(|d| d.contains("float const *")));
        assert!(single_half.starts_with("// Single Precision\nvoid expfv("));
    }

    #[test]
    fn test_batch_catalog_order() {
        let code = codegen_batch(false).unwrap();
        let names: Vec<_> = declarations(&code)
            .iter()
            .map(|d| &d["void ".len()..d.find('(').unwrap()])
            .collect();
        let expected: Vec<_> = Precision::ALL
            .iter()
            .flat_map(|p| {
                all_functions()
                    .iter()
                    .map(move |e| format!("{}{}", e.name, p.vector_suffix()))
            })
            .collect();
        assert!(names == expected);
    }

    #[test]
    fn test_unit_layout() {
        let code = codegen_unit(false).unwrap();
        assert!(code.starts_with(
            "// Automatically generated\n\n#include \"vdtMath.h\"\n\nnamespace vdt{\n// Double Precision\n"
        ));
        assert!(code.ends_with("}\n\n} // end of vdt namespace\n"));
        assert!(code.contains(
            "void expv(const uint32_t size, double const * __restrict__ iarray, double* __restrict__ oarray)\n{\n  for (uint32_t i=0;i<size;++i)\n    oarray[i]=exp(iarray[i]);\n}\n\nvoid logv("
        ));
    }

    #[test]
    fn test_unit_preload() {
        let code = codegen_unit(true).unwrap();
        assert!(code.contains("    oarray[i]=fast_exp(iarray[i]);\n"));
        assert!(code.contains("    oarray[i]=fast_atan2f(iarray1[i],iarray2[i]);\n"));
        assert!(!code.contains("fast_fast_"));
        assert!(!code.contains("    oarray[i]=exp(iarray[i]);\n"));
    }

    #[test]
    fn test_write_unit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_unit(false, dir.path()).unwrap();
        assert!(path == dir.path().join(VECTOR_IMPL));
        assert!(std::fs::read_to_string(&path).unwrap() == codegen_unit(false).unwrap());
    }

    #[test]
    fn test_write_unit_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_unit(true, dir.path()).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_unit(true, dir.path()).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert!(first == second);
    }

    #[test]
    fn test_write_unit_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VECTOR_IMPL);
        std::fs::write(&path, "stale contents that are longer than nothing").unwrap();
        write_unit(false, dir.path()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap() == codegen_unit(false).unwrap());
    }

    #[test]
    fn test_write_unit_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = write_unit(false, &missing).unwrap_err();
        assert!(matches!(&err, Error::Io { path, .. } if path == &missing.join(VECTOR_IMPL)));
        assert!(!missing.exists());
    }
}
