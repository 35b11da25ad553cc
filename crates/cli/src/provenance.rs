//! `<output-stem>.provenance.json` next to every benchmark artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters and extra artifacts recorded next to a benchmark output.
pub struct Payload {
    pub params: Value,
    pub extra_outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            extra_outputs: Vec::new(),
        }
    }

    pub fn with_output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.extra_outputs.push(path.as_ref().to_path_buf());
        self
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    crate_version: &'static str,
    params: &'a Value,
    outputs: Vec<&'a Path>,
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let doc = Sidecar {
        code_rev: code_rev(),
        crate_version: trisweep::VERSION,
        params: &payload.params,
        outputs: std::iter::once(artifact)
            .chain(payload.extra_outputs.iter().map(PathBuf::as_path))
            .collect(),
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact.file_stem().unwrap_or(artifact.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `unknown`.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
