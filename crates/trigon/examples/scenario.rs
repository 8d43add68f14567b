//! Walk the default form input through validation and measurement.
//!
//! Prints what the display page shows: the three angles with one decimal,
//! their sum, the classification, and where each angle label goes.

use trigon::geom2::label_anchor;
use trigon::prelude::*;

fn main() {
    let tri = Triangle::from_coords([(100.0, 100.0), (400.0, 100.0), (250.0, 300.0)]);
    if let Err(err) = InputPolicy::default().validate(&tri) {
        eprintln!("rejected: {err}");
        std::process::exit(1);
    }
    let m = measure(&tri).expect("validated triangle measures");
    for v in Vertex::ALL {
        let p = tri.vertex(v);
        let label = label_anchor(&tri, v, 30.0).expect("vertex off centroid");
        println!(
            "angle {v} at ({}, {}) = {:.1}° label=({:.1}, {:.1})",
            p.x,
            p.y,
            m.angle(v),
            label.x,
            label.y
        );
    }
    println!("sum={:.1}° kind={} area={}", m.angle_sum, m.kind, m.area);
}
