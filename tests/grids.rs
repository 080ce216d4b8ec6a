mod util;
use util::*;

use mesh_multiscale::prelude::*;

#[test]
fn structured_triangles_have_expected_counts() -> Result<(), Box<dyn std::error::Error>> {
    let grid = structured_box_2d(2, 3, StructuredCellType::Triangle)?;
    assert_eq!(grid.dimension(), 2);
    assert_eq!(grid.size(0), 12);
    assert_eq!(grid.size(2), 12);
    // V - E + F = 1 for a disc
    assert_eq!(grid.size(1), grid.size(0) + grid.size(2) - 1);
    for cell in grid.entities(0) {
        assert_eq!(grid.geometry_type(cell)?, GeometryType::TRIANGLE);
        assert_eq!(grid.sub_entity_count(cell, 1)?, 3);
        assert_eq!(grid.sub_entity_count(cell, 2)?, 3);
    }
    Ok(())
}

#[test]
fn global_indices_are_dense_per_geometry_type() {
    let (grid, tri, quad) = mixed_2d();
    assert_eq!(grid.global_index(tri).unwrap(), 0);
    assert_eq!(grid.global_index(quad).unwrap(), 0);
    let edges: Vec<_> = grid
        .entities(1)
        .map(|e| grid.global_index(e).unwrap())
        .collect();
    assert_permutation(&edges, &(0..edges.len()).collect::<Vec<_>>());
}

#[test]
fn sub_entity_access_is_bounded() {
    let (grid, e0, _, _) = two_triangles();
    assert!(matches!(
        grid.sub_entity(e0, 1, 3),
        Err(MultiscaleError::SubEntityOutOfRange { index: 3, count: 3, .. })
    ));
    assert!(matches!(
        grid.sub_entity_count(e0, 3),
        Err(MultiscaleError::CodimOutOfRange { codim: 3, dimension: 2 })
    ));
}

#[test]
fn sub_entity_order_is_deterministic() {
    let (grid, e0, _, f) = two_triangles();
    let first: Vec<_> = (0..3).map(|i| grid.sub_entity(e0, 1, i).unwrap()).collect();
    let again: Vec<_> = (0..3).map(|i| grid.sub_entity(e0, 1, i).unwrap()).collect();
    assert_eq!(first, again);
    assert_eq!(first[0], f);
}

#[test]
fn boundary_ids_of_a_structured_box() {
    let grid = structured_box_2d(1, 1, StructuredCellType::Quadrilateral).unwrap();
    let cell = grid.entities(0).next().unwrap();
    let mut ids: Vec<_> = grid
        .intersections(cell)
        .unwrap()
        .iter()
        .filter_map(|i| i.boundary_id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn codims_of_a_hexahedral_box() {
    let grid = structured_box_3d(2, 1, 1).unwrap();
    assert_eq!(grid.size(0), 2);
    assert_eq!(grid.size(1), 11);
    assert_eq!(grid.size(2), 20);
    assert_eq!(grid.size(3), 12);
    let v = grid.entities(3).next().unwrap();
    assert_eq!(grid.codim(v).unwrap(), 3);
    assert_eq!(grid.geometry_type(v).unwrap(), GeometryType::VERTEX);
}
