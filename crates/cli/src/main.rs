use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use dchull::sample::{draw_cloud, CloudCfg, Distribution, ReplayToken};
use dchull::{solve_with, HullError, SolveCfg, Vec2};

mod io;

use io::{HullReport, Provenance};

#[derive(Parser)]
#[command(name = "dchull-cli")]
#[command(about = "Divide-and-conquer convex hulls of planar point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file and write it as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Largest point slice built directly instead of split
        #[arg(long, default_value_t = 3)]
        leaf_size: usize,
    },
    /// Write a reproducible random point cloud (.csv or .json)
    Generate {
        #[arg(long, value_enum, default_value_t = Dist::Square)]
        dist: Dist,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Dist {
    Square,
    Disc,
    Gaussian,
    Circle,
}

impl From<Dist> for Distribution {
    fn from(d: Dist) -> Self {
        match d {
            Dist::Square => Distribution::Square,
            Dist::Disc => Distribution::Disc,
            Dist::Gaussian => Distribution::Gaussian,
            Dist::Circle => Distribution::Circle,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            leaf_size,
        } => solve(&input, &out, leaf_size).map(|_| ()),
        Action::Generate {
            dist,
            count,
            seed,
            index,
            scale,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                distribution: dist.into(),
                scale,
            };
            generate(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn solve(input: &Path, out: &Path, leaf_size: usize) -> Result<HullReport> {
    tracing::info!(input = %input.display(), out = %out.display(), leaf_size, "solve");
    let points = sorted_by_x(io::read_points(input)?)
        .with_context(|| format!("reading {}", input.display()))?;
    let hull = solve_with(&points, SolveCfg { leaf_size })
        .with_context(|| format!("computing hull of {}", input.display()))?;
    let report = HullReport::new(&hull, points.len());

    io::ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = Provenance::new(json!({ "command": "solve", "leaf_size": leaf_size }))
        .with_input(input)
        .write_next_to(out)?;
    tracing::info!(
        points = points.len(),
        vertices = report.vertices.len(),
        area = report.area,
        provenance = %prov.display(),
        "solved"
    );
    Ok(report)
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, dist = ?cfg.distribution, seed = tok.seed, index = tok.index, out = %out.display(), "generate");
    let points = draw_cloud(cfg, tok)
        .with_context(|| format!("scale {} does not give a finite cloud", cfg.scale))?;
    io::write_points(out, &points)?;
    Provenance::new(json!({
        "command": "generate",
        "distribution": format!("{:?}", cfg.distribution),
        "count": cfg.count,
        "scale": cfg.scale,
        "seed": tok.seed,
        "index": tok.index
    }))
    .write_next_to(out)?;
    Ok(())
}

/// Sort file rows by x. Rows are checked first so errors name the row as read.
fn sorted_by_x(mut points: Vec<Vec2<f64>>) -> Result<Vec<Vec2<f64>>, HullError> {
    if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(HullError::NonFinite { index });
    }
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    Ok(points)
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": io::code_rev(),
        "version": dchull::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_then_solve() {
        let dir = tempdir().unwrap();
        let cloud = dir.path().join("cloud.csv");
        let cfg = CloudCfg {
            count: 400,
            distribution: Distribution::Disc,
            scale: 2.0,
        };
        generate(cfg, ReplayToken { seed: 5, index: 0 }, &cloud).unwrap();
        assert!(dir.path().join("cloud.provenance.json").exists());

        let out = dir.path().join("out/hull.json");
        let report = solve(&cloud, &out, 3).unwrap();
        assert_eq!(report.input_points, 400);
        assert!(report.vertices.len() >= 3);
        assert!(report.area > 0.0 && report.area <= std::f64::consts::PI * 4.0);

        let written: HullReport = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written, report);
        assert!(dir.path().join("out/hull.provenance.json").exists());
    }

    #[test]
    fn solve_reports_empty_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, "[]").unwrap();
        let err = solve(&input, &dir.path().join("hull.json"), 3).unwrap_err();
        assert!(format!("{err:#}").contains("empty"));
    }

    #[test]
    fn solve_scenario_square_with_center() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.json");
        fs::write(&input, "[[0.5,0.5],[1,1],[0,0],[1,0],[0,1]]").unwrap();
        let report = solve(&input, &dir.path().join("hull.json"), 3).unwrap();
        assert_eq!(
            report.vertices,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
        );
        assert!((report.area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_rows_keep_their_file_index() {
        let pts = vec![
            Vec2::new(3.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, f64::NAN),
            Vec2::new(0.0, 0.0),
        ];
        assert_eq!(sorted_by_x(pts), Err(HullError::NonFinite { index: 2 }));
        let pts = vec![Vec2::new(f64::NAN, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0)];
        assert_eq!(sorted_by_x(pts), Err(HullError::NonFinite { index: 0 }));

        let pts = vec![Vec2::new(2.0, 0.0), Vec2::new(0.0, 1.0)];
        assert_eq!(
            sorted_by_x(pts),
            Ok(vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 0.0)])
        );
    }

    #[test]
    fn generate_rejects_non_finite_scale() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("cloud.csv");
        for scale in [f64::NAN, f64::INFINITY] {
            let cfg = CloudCfg {
                count: 10,
                distribution: Distribution::Square,
                scale,
            };
            let err = generate(cfg, ReplayToken { seed: 1, index: 0 }, &out).unwrap_err();
            assert!(format!("{err:#}").contains("finite cloud"));
        }
        assert!(!out.exists());

        let cfg = CloudCfg {
            count: 10,
            distribution: Distribution::Square,
            scale: 1e308,
        };
        generate(cfg, ReplayToken { seed: 1, index: 0 }, &out).unwrap();
        assert!(io::read_points(&out).unwrap().iter().all(|p| p.x.is_finite()));
    }
}
