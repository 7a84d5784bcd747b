//! **rectnav-core** — geometry and mesh model for rectangular navigation
//! meshes.
//!
//! This crate provides the value types shared across the *rectnav*
//! workspace: 2D points and axis-aligned rectangles ([`Vec2`], [`Rect`]),
//! and the navigation mesh itself ([`Mesh`]) — an immutable collection of
//! rectangular cells with a symmetric adjacency relation, addressed by
//! stable [`CellId`] indices.

pub mod geom;
pub mod mesh;

pub use geom::{Rect, Vec2};
pub use mesh::{CellId, Mesh, MeshBuilder};
