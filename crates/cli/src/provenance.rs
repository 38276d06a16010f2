use anyhow::{Context, Result};
use serde_json::{json, Value};
use skybound::BoundaryOutput;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a generated artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
    /// Shape of the written boundary set, if known.
    pub output: Option<OutputShape>,
}

/// Polygon and vertex counts plus the frame the coordinates ended up in.
pub struct OutputShape {
    pub polygons: usize,
    pub vertices: usize,
    pub frame: String,
    pub degraded: bool,
}

impl OutputShape {
    pub fn of(output: &BoundaryOutput) -> Self {
        Self {
            polygons: output.polygons.len(),
            vertices: output.total_vertices(),
            frame: output.frame.label(),
            degraded: output.frame.is_degraded(),
        }
    }
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: &BoundaryOutput) -> Self {
        self.output = Some(OutputShape::of(output));
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

/// Write `<artifact>.provenance.json` with code revision, callsite, params, inputs, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    let callsite = Location::caller();
    let shape = payload.output.map(|o| {
        json!({
            "polygons": o.polygons,
            "vertices": o.vertices,
            "frame": o.frame,
            "degraded": o.degraded
        })
    });
    let doc = json!({
        "tool": "skybound",
        "version": skybound::VERSION,
        "code_rev": current_git_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [artifact.to_string_lossy()],
        "shape": shape
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/web/boundaries.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/web/boundaries.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("boundaries.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"steps": 10})).with_input("constbnd.dat");
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["steps"], 10);
        assert_eq!(parsed["inputs"][0], "constbnd.dat");
        assert_eq!(parsed["tool"], "skybound");
        assert!(parsed["shape"].is_null());
    }

    #[test]
    fn sidecar_records_output_shape() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("boundaries.json");
        let output = BoundaryOutput {
            polygons: [("ORI".to_string(), vec![[5.5, 10.0], [5.6, 10.0]])].into(),
            stats: Default::default(),
            frame: skybound::OutputFrame::Icrs,
        };
        let payload = Payload::new(json!({})).with_output(&output);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["shape"]["polygons"], 1);
        assert_eq!(parsed["shape"]["vertices"], 2);
        assert_eq!(parsed["shape"]["frame"], "ICRS");
        assert_eq!(parsed["shape"]["degraded"], false);
    }
}
