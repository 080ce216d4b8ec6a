mod util;
use util::*;

use mesh_multiscale::prelude::*;
use std::sync::Arc;

fn split_interval(n: usize) -> Decomposition<LeafGrid> {
    let grid = Arc::new(structured_interval(n).unwrap());
    let mut ms = Decomposition::new(Arc::clone(&grid)).without_diagnostics();
    for (i, cell) in grid.entities(0).enumerate() {
        ms.add(cell, usize::from(i >= n / 2)).unwrap();
    }
    ms.finalize().unwrap();
    ms
}

#[test]
fn entities_are_filtered_to_the_subdomain() {
    let ms = split_interval(4);
    let grid = ms.global_view();
    let left = ms.local_view(0);
    let right = ms.local_view(1);
    assert_eq!(left.elements().count(), 2);
    assert_eq!(right.entities(1).count(), 3);
    // the middle vertex belongs to both halves
    let shared: Vec<_> = grid
        .entities(1)
        .filter(|&v| left.contains_entity(v) && right.contains_entity(v))
        .collect();
    assert_eq!(shared.len(), 1);
    assert_eq!(left.size(1) + right.size(1), grid.size(1) + 1);
}

#[test]
fn elements_follow_global_order_and_local_indices_follow_add_order() {
    let grid = Arc::new(structured_interval(3).unwrap());
    let cells: Vec<_> = grid.entities(0).collect();
    let mut ms = Decomposition::new(Arc::clone(&grid)).without_diagnostics();
    ms.add(cells[2], 0).unwrap();
    ms.add(cells[0], 0).unwrap();
    ms.add(cells[1], 1).unwrap();
    ms.finalize().unwrap();
    let view = ms.local_view(0);
    assert_eq!(view.elements().collect::<Vec<_>>(), vec![cells[0], cells[2]]);
    assert_eq!(view.local_index_of(cells[2]).unwrap(), Some(0));
    assert_eq!(view.local_index_of(cells[0]).unwrap(), Some(1));
    assert_eq!(view.local_index_of(cells[1]).unwrap(), None);
}

#[test]
fn unknown_entities_are_not_members() {
    let ms = split_interval(2);
    let view = ms.local_view(0);
    assert!(!view.contains_entity(pid(1_000)));
    assert_eq!(
        view.local_index_of(pid(1_000)),
        Err(MultiscaleError::UnknownEntity(pid(1_000)))
    );
}

#[test]
fn size_beyond_dimension_is_zero() {
    let ms = split_interval(2);
    assert_eq!(ms.local_view(0).size(2), 0);
    assert_eq!(ms.local_view(0).entities(5).count(), 0);
}

#[test]
fn intersections_reach_into_other_subdomains() {
    let ms = split_interval(2);
    let left = ms.local_view(0);
    let right = ms.local_view(1);
    let cell = left.elements().next().unwrap();
    let is = left.intersections(cell).unwrap();
    assert_eq!(is.len(), 2);

    let boundary = is.iter().find(|i| i.boundary()).unwrap();
    assert_eq!(left.boundary_id(boundary), Some(1));

    let interior = is.iter().find(|i| i.neighbor()).unwrap();
    let outside = interior.outside.unwrap();
    assert!(!left.contains_entity(outside));
    assert!(right.contains_entity(outside));
    assert_eq!(left.boundary_id(interior), None);
}

#[test]
fn views_are_cheap_clones() {
    let ms = split_interval(2);
    let view = ms.local_view(1);
    let copy = (*view).clone();
    assert_eq!(copy.subdomain(), 1);
    assert!(Arc::ptr_eq(copy.global_view(), view.global_view()));
    assert_eq!(copy.local_map(), view.local_map());
    assert_eq!(copy.level(), 0);
}

struct CountingHandle {
    gathered: usize,
}

impl DataHandle<PointId> for CountingHandle {
    type Data = f64;

    fn contains(&self, _dim: usize, codim: usize) -> bool {
        codim == 0
    }

    fn gather(&self, _entity: PointId, buf: &mut Vec<f64>) {
        buf.push(1.0);
    }

    fn scatter(&mut self, _entity: PointId, data: &[f64]) {
        self.gathered += data.len();
    }
}

#[test]
fn serial_communication_is_a_no_op() {
    let ms = split_interval(2);
    let mut handle = CountingHandle { gathered: 0 };
    ms.local_view(0)
        .communicate(&mut handle, InterfaceKind::AllAll, CommDirection::Forward)
        .unwrap();
    assert_eq!(handle.gathered, 0);
}
