//! Loading compiler outputs and source files into a [`Build`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ir::{Build, CompilationUnit, SourceInput};
use rayon::prelude::*;
use semver::VersionReq;
use tracing::debug;

/// Reads and decodes the given standard-JSON output files in parallel
/// (one compilation unit each), then ingests them into a single build.
pub fn load_build(outputs: &[PathBuf], root: &Path) -> Result<Build> {
    let decoded: Vec<(CompilationUnit, ast::SolcOutput)> = outputs
        .par_iter()
        .map(|path| -> Result<_> {
            let raw = fs::read(path)
                .with_context(|| format!("cannot read compiler output {}", path.display()))?;
            let output = ast::parse_output(std::str::from_utf8(&raw)?)
                .with_context(|| format!("cannot decode compiler output {}", path.display()))?;
            let cu = CompilationUnit::from_content(&raw, VersionReq::STAR);
            Ok((cu, output))
        })
        .collect::<Result<_>>()?;

    let mut build = Build::new();
    for (cu, output) in &decoded {
        if output.has_errors() {
            bail!("compiler output reports errors; refusing to build the IR");
        }
        let mut sources = BTreeMap::new();
        for unit_name in output.sources.keys() {
            let path = root.join(unit_name);
            let content = fs::read(&path)
                .with_context(|| format!("cannot read source file {}", path.display()))?;
            debug!(file = %path.display(), "loaded source");
            sources.insert(
                unit_name.clone(),
                SourceInput {
                    path: path.canonicalize().unwrap_or(path),
                    content,
                },
            );
        }
        build.ingest_output(cu, output, &sources)?;
    }
    build.finalize();
    Ok(build)
}
