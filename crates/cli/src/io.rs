//! Point-set and hull files.
//!
//! - `.csv`: header row with `x` and `y` columns (extra columns ignored).
//! - `.json`: array of `[x, y]` pairs.
//!
//! Every written artifact gets a `<stem>.provenance.json` sidecar
//! recording the code revision, command parameters, and files read.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use dchull::Hull;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
        _ => bail!("unsupported point file {} (expected .csv or .json)", path.display()),
    }
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    match format_of(path)? {
        Format::Csv => read_csv(path),
        Format::Json => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(pairs.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
        }
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Vector2::new(x, y)).collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("column {name:?}: empty value in row {row}")))
        .collect()
}

pub fn write_points(path: &Path, points: &[Vector2<f64>]) -> Result<()> {
    ensure_parent(path)?;
    match format_of(path)? {
        Format::Csv => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = DataFrame::new(vec![Series::new("x".into(), xs), Series::new("y".into(), ys)])?;
            let mut file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        }
        Format::Json => {
            let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
            fs::write(path, serde_json::to_vec(&pairs)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(())
}

/// Serialized result of `solve`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullReport {
    /// Counter-clockwise from the leftmost vertex.
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub perimeter: f64,
    pub input_points: usize,
}

impl HullReport {
    pub fn new(hull: &Hull, input_points: usize) -> Self {
        Self {
            vertices: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
            area: hull.area(),
            perimeter: hull.perimeter(),
            input_points,
        }
    }
}

/// Sidecar describing how an artifact was produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: String,
    pub params: Value,
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: code_rev(),
            version: dchull::VERSION.to_string(),
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.to_path_buf());
        self
    }

    /// Record `artifact` as the output and write the sidecar beside it.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        self.outputs.push(artifact.to_path_buf());
        ensure_parent(&path)?;
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse`, else `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_csv_with_integer_and_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,x,y\n0,0,0\n1,2.5,1\n2,1,-3\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Vector2::new(0.0, 0.0), Vector2::new(2.5, 1.0), Vector2::new(1.0, -3.0)]
        );
    }

    #[test]
    fn csv_without_y_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n0,0\n").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("\"y\""));
    }

    #[test]
    fn written_csv_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/cloud.csv");
        let pts = vec![Vector2::new(0.25, -1.0), Vector2::new(3.0, 4.5)];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(read_points(Path::new("points.txt")).is_err());
    }

    #[test]
    fn sidecar_sits_beside_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.json")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(sidecar_path(Path::new("cloud")), Path::new("cloud.provenance.json"));
    }

    #[test]
    fn sidecar_round_trips_through_serde() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        let prov = Provenance::new(serde_json::json!({ "command": "solve", "leaf_size": 3 }))
            .with_input(Path::new("pts.csv"));
        let path = prov.clone().write_next_to(&artifact).unwrap();
        assert_eq!(path, dir.path().join("hull.provenance.json"));

        let back: Provenance = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back.inputs, vec![PathBuf::from("pts.csv")]);
        assert_eq!(back.outputs, vec![artifact]);
        assert_eq!(back.params["leaf_size"], 3);
        assert_eq!(back.version, dchull::VERSION);
        assert_eq!(back.code_rev, prov.code_rev);
    }
}
