use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::api::{
    draw_triangle, measure, parse_point, InputPolicy, Measurements, ReplayToken, SampleCfg,
    Triangle, Vertex,
};
use trigon::Point2;

mod provenance;

#[derive(Parser)]
#[command(name = "trigon-cli")]
#[command(about = "Validate three points and report the triangle's angles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate and print angles, sides, area and classification
    Measure {
        #[command(flatten)]
        points: PointsArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write the JSON report here, with a provenance sidecar
        #[arg(long)]
        out: Option<String>,
    },
    /// Run the form policy and the validity gate; non-zero exit on rejection
    Check {
        #[command(flatten)]
        points: PointsArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Draw seeded random triangles and print one JSON report per line
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct PointsArgs {
    /// Vertex A as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    a: Point2<f64>,
    /// Vertex B as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    b: Point2<f64>,
    /// Vertex C as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    c: Point2<f64>,
}

impl PointsArgs {
    fn triangle(&self) -> Triangle {
        Triangle::new(self.a, self.b, self.c)
    }
}

#[derive(Args, Clone, Copy)]
struct PolicyArgs {
    /// Smallest accepted coordinate
    #[arg(long, default_value_t = trigon::geom2::COORD_MIN, allow_hyphen_values = true)]
    min: f64,
    /// Largest accepted coordinate
    #[arg(long, default_value_t = trigon::geom2::COORD_MAX, allow_hyphen_values = true)]
    max: f64,
    /// Smallest accepted area
    #[arg(long, default_value_t = trigon::geom2::MIN_INPUT_AREA)]
    min_area: f64,
}

impl From<PolicyArgs> for InputPolicy {
    fn from(p: PolicyArgs) -> Self {
        InputPolicy {
            min: p.min,
            max: p.max,
            min_area: p.min_area,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Measure {
            points,
            policy,
            json,
            out,
        } => run_measure(points.triangle(), policy.into(), json, out),
        Action::Check { points, policy } => check(points.triangle(), policy.into()),
        Action::Sample {
            seed,
            index,
            count,
            policy,
        } => sample(seed, index, count, policy.into()),
        Action::Report => report(),
    }
}

/// JSON shape of one measured triangle.
#[derive(Serialize, Debug, PartialEq)]
struct Report {
    points: [[f64; 2]; 3],
    angles: [f64; 3],
    angle_sum: f64,
    sides: [f64; 3],
    perimeter: f64,
    area: f64,
    kind: &'static str,
    centroid: [f64; 2],
}

impl Report {
    fn new(tri: &Triangle, m: &Measurements) -> Self {
        Self {
            points: tri.points().map(|p| [p.x, p.y]),
            angles: m.angles,
            angle_sum: m.angle_sum,
            sides: m.sides,
            perimeter: m.perimeter,
            area: m.area,
            kind: m.kind.as_str(),
            centroid: [m.centroid.x, m.centroid.y],
        }
    }
}

/// Policy first, then the evaluator's own gate.
fn evaluate(tri: &Triangle, policy: &InputPolicy) -> Result<Measurements> {
    if let Err(err) = policy.validate(tri) {
        tracing::warn!(%err, "input rejected");
        return Err(err).context("invalid input");
    }
    let m = measure(tri).context("cannot measure triangle")?;
    Ok(m)
}

fn run_measure(
    tri: Triangle,
    policy: InputPolicy,
    json: bool,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(a = ?tri.a, b = ?tri.b, c = ?tri.c, json, out = ?out, "measure");
    let m = evaluate(&tri, &policy)?;
    let report = Report::new(&tri, &m);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&tri, &m));
    }
    if let Some(out) = out {
        write_report(&out, &report, &policy)?;
    }
    Ok(())
}

fn render_text(tri: &Triangle, m: &Measurements) -> String {
    let mut s = String::new();
    for v in Vertex::ALL {
        s.push_str(&format!("angle {v}: {:.1}°\n", m.angle(v)));
    }
    s.push_str(&format!("sum of angles: {:.1}°\n", m.angle_sum));
    s.push_str(&format!(
        "coordinates: A({}, {}), B({}, {}), C({}, {})\n",
        tri.a.x, tri.a.y, tri.b.x, tri.b.y, tri.c.x, tri.c.y
    ));
    s.push_str(&format!("area: {}\n", m.area));
    s.push_str(&format!("type: {}\n", m.kind));
    s
}

fn write_report(out: &str, report: &Report, policy: &InputPolicy) -> Result<()> {
    let out_path = std::path::Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let payload = provenance::Payload::new(serde_json::json!({
        "points": report.points,
        "policy": {
            "min": policy.min,
            "max": policy.max,
            "min_area": policy.min_area
        }
    }));
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "report written");
    Ok(())
}

fn check(tri: Triangle, policy: InputPolicy) -> Result<()> {
    tracing::info!(a = ?tri.a, b = ?tri.b, c = ?tri.c, "check");
    evaluate(&tri, &policy)?;
    println!("ok");
    Ok(())
}

fn sample(seed: u64, index: u64, count: u64, policy: InputPolicy) -> Result<()> {
    tracing::info!(seed, index, count, "sample");
    for line in sample_lines(seed, index, count, &policy)? {
        println!("{line}");
    }
    Ok(())
}

/// One JSON line per drawn triangle, all drawn before anything is printed.
fn sample_lines(seed: u64, index: u64, count: u64, policy: &InputPolicy) -> Result<Vec<String>> {
    let cfg = SampleCfg {
        bounds: trigon::api::SampleBounds {
            min: policy.min,
            max: policy.max,
        },
        min_area: policy.min_area,
        ..SampleCfg::default()
    };
    let mut tok = ReplayToken { seed, index };
    let mut lines = Vec::new();
    for _ in 0..count {
        let Some(tri) = draw_triangle(cfg, tok) else {
            bail!(
                "no triangle with area >= {} in [{}, {}] found for token {:?}",
                cfg.min_area,
                policy.min,
                policy.max,
                tok
            );
        };
        let m = evaluate(&tri, policy)?;
        let line = serde_json::json!({
            "seed": tok.seed,
            "index": tok.index,
            "report": Report::new(&tri, &m),
        });
        lines.push(serde_json::to_string(&line)?);
        tok = tok.next();
    }
    Ok(lines)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": trigon::VERSION,
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

    fn scenario() -> Triangle {
        Triangle::from_coords([(100.0, 100.0), (400.0, 100.0), (250.0, 300.0)])
    }

    #[test]
    fn text_rendering_matches_display_page() {
        let tri = scenario();
        let m = measure(&tri).unwrap();
        let text = render_text(&tri, &m);
        assert!(text.contains("angle A: 53.1°"));
        assert!(text.contains("angle C: 73.7°"));
        assert!(text.contains("sum of angles: 180.0°"));
        assert!(text.contains("A(100, 100), B(400, 100), C(250, 300)"));
        assert!(text.contains("type: acute"));
    }

    #[test]
    fn evaluate_rejects_out_of_range_and_collinear() {
        let policy = InputPolicy::default();
        let far = Triangle::from_coords([(0.0, 0.0), (900.0, 0.0), (0.0, 10.0)]);
        let err = evaluate(&far, &policy).unwrap_err();
        assert!(format!("{err:#}").contains("outside the range"));
        let line = Triangle::from_coords([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let err = evaluate(&line, &policy).unwrap_err();
        assert!(format!("{err:#}").contains("straight line"));
    }

    #[test]
    fn evaluator_gate_applies_under_permissive_policy() {
        let policy = InputPolicy {
            min_area: 0.0,
            ..InputPolicy::default()
        };
        let line = Triangle::from_coords([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let err = evaluate(&line, &policy).unwrap_err();
        assert!(format!("{err:#}").contains("collinear"));
    }

    #[test]
    fn report_json_shape() {
        let tri = scenario();
        let report = Report::new(&tri, &measure(&tri).unwrap());
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["kind"], "acute");
        assert_eq!(v["points"][1][0], 400.0);
        assert_eq!(v["area"], 30000.0);
    }

    #[test]
    fn write_report_creates_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("tri.json");
        let tri = scenario();
        let report = Report::new(&tri, &measure(&tri).unwrap());
        write_report(out.to_str().unwrap(), &report, &InputPolicy::default()).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written["kind"], "acute");
        let sidecar = dir.path().join("nested").join("tri.provenance.json");
        let prov: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["policy"]["max"], 800.0);
    }

    #[test]
    fn cli_parses_points() {
        let cmd = Cmd::try_parse_from([
            "trigon-cli", "check", "--a", "100,100", "--b", "400,100", "--c", "-5,300",
        ])
        .unwrap();
        match cmd.action {
            Action::Check { points, policy } => {
                assert_eq!(points.c, Point2::new(-5.0, 300.0));
                assert_eq!(policy.max, 800.0);
            }
            _ => panic!("expected check"),
        }
        let bad = ["trigon-cli", "check", "--a", "1", "--b", "2,2", "--c", "3,3"];
        assert!(Cmd::try_parse_from(bad).is_err());
    }

    #[test]
    fn sample_prints_reproducible_accepted_triangles() {
        let policy = InputPolicy::default();
        let lines = sample_lines(7, 3, 4, &policy).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines, sample_lines(7, 3, 4, &policy).unwrap());
        for (k, line) in lines.iter().enumerate() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["seed"], 7);
            assert_eq!(v["index"], 3 + k as u64);
            let angles = v["report"]["angle_sum"].as_f64().unwrap();
            assert!((angles - 180.0).abs() < 0.01);
        }
    }

    #[test]
    fn sample_with_overflowing_bounds_is_an_error() {
        let policy = InputPolicy {
            min: -1e308,
            max: 1e308,
            ..InputPolicy::default()
        };
        let err = sample_lines(0, 0, 1, &policy).unwrap_err();
        assert!(err.to_string().contains("no triangle"));
    }

    #[test]
    fn sample_parses_negative_bounds() {
        let cmd =
            Cmd::try_parse_from(["trigon-cli", "sample", "--min=-1e308", "--max=1e308"]).unwrap();
        match cmd.action {
            Action::Sample { policy, count, .. } => {
                assert_eq!(policy.min, -1e308);
                assert_eq!(count, 1);
            }
            _ => panic!("expected sample"),
        }
    }
}
