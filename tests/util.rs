#![allow(dead_code)]
use mesh_multiscale::{
    grid::{GridBuilder, LeafGrid},
    topology::cell_type::CellType,
    topology::point::PointId,
};
use std::sync::Arc;

pub fn pid(u: u64) -> PointId { PointId::new(u).unwrap() }

/// Two triangles sharing one edge. The shared edge is the first edge
/// created, so it is the first codim-1 sub-entity of both cells.
///
/// Returns the grid, both cells and the shared edge.
pub fn two_triangles() -> (Arc<LeafGrid>, PointId, PointId, PointId) {
    let mut b = GridBuilder::new(2);
    let v = b.add_vertices(4).unwrap();
    let e0 = b.add_cell(CellType::Triangle, &[v[1], v[2], v[0]]).unwrap();
    let e1 = b.add_cell(CellType::Triangle, &[v[1], v[3], v[2]]).unwrap();
    let shared = b.facet(&[v[1], v[2]]).unwrap();
    (Arc::new(b.build().unwrap()), e0, e1, shared)
}

/// A triangle and a quadrilateral sharing one edge.
pub fn mixed_2d() -> (Arc<LeafGrid>, PointId, PointId) {
    let mut b = GridBuilder::new(2);
    let v = b.add_vertices(5).unwrap();
    let tri = b.add_cell(CellType::Triangle, &[v[0], v[1], v[2]]).unwrap();
    let quad = b
        .add_cell(CellType::Quadrilateral, &[v[1], v[3], v[4], v[2]])
        .unwrap();
    (Arc::new(b.build().unwrap()), tri, quad)
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
