use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_multiscale::grid::GridView;
use mesh_multiscale::grid::structured::{StructuredCellType, structured_box_2d};
use mesh_multiscale::multiscale::Decomposition;
use std::sync::Arc;

fn bench_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("decomposition");

    for &n in &[16usize, 32usize] {
        let grid = Arc::new(
            structured_box_2d(n, n, StructuredCellType::Triangle).expect("structured grid"),
        );
        let cells: Vec<_> = grid.entities(0).collect();

        group.bench_with_input(BenchmarkId::new("add_and_finalize_4", n), &n, |b, _| {
            b.iter(|| {
                let mut ms = Decomposition::new(Arc::clone(&grid)).without_diagnostics();
                for (i, &cell) in cells.iter().enumerate() {
                    ms.add(cell, i * 4 / cells.len()).expect("add");
                }
                ms.finalize().expect("finalize");
                black_box(ms.local_view(0).size(0));
            });
        });

        group.bench_with_input(BenchmarkId::new("single_subdomain", n), &n, |b, _| {
            b.iter(|| {
                let mut ms = Decomposition::new(Arc::clone(&grid)).without_diagnostics();
                for &cell in &cells {
                    ms.add(cell, 0).expect("add");
                }
                black_box(ms.size());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decomposition);
criterion_main!(benches);
