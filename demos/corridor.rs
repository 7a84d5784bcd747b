//! Minimal end-to-end demo: build a small mesh by hand, query one path and
//! print the waypoints together with the cells the search explored.

use rectnav_core::{MeshBuilder, Rect, Vec2};
use rectnav_paths::PathFinder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An L-shaped corridor: three rooms around a corner.
    let mut builder = MeshBuilder::new();
    let west = builder.add_cell(Rect::new(0.0, 0.0, 4.0, 2.0));
    let corner = builder.add_cell(Rect::new(4.0, 0.0, 6.0, 2.0));
    let south = builder.add_cell(Rect::new(4.0, 2.0, 6.0, 8.0));
    builder.connect(west, corner);
    builder.connect(corner, south);
    let mesh = builder.build();

    let source = Vec2::new(0.5, 1.0);
    let destination = Vec2::new(5.0, 7.5);

    let mut finder = PathFinder::new(mesh.len());
    let outcome = finder.find_path(&mesh, source, destination);

    for cell in &outcome.explored {
        println!("explored {:?}: {}", cell, mesh.rect(*cell));
    }
    for point in outcome.result? {
        println!("waypoint {point}");
    }
    Ok(())
}
