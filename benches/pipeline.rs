use criterion::{black_box, criterion_group, criterion_main, Criterion};

use row_etl::pipeline::{Pipeline, RowStream};
use row_etl::transform::{filter, rename};
use row_etl::types::{Row, Value};

fn order_rows(n: i64) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::from_iter([
                ("order_id", Value::Utf8(format!("O{i}"))),
                ("customer", Value::Utf8(format!("C{}", i % 100))),
                ("total_price", Value::Float64((i % 500) as f64)),
            ])
        })
        .collect()
}

fn bench_filter_rename_run(c: &mut Criterion) {
    let rows = order_rows(10_000);

    c.bench_function("run_filter_rename_10k", |b| {
        b.iter(|| {
            let source = rows.clone();
            let mut pipeline = Pipeline::new(
                move || source.clone().into_iter().map(Ok),
                vec![
                    filter(|row| {
                        row.get("total_price")
                            .and_then(|v| v.as_f64())
                            .is_some_and(|p| p >= 20.0)
                    }),
                    rename([("order_id", "id"), ("total_price", "price")]),
                ],
                |rows: RowStream<'_>| {
                    let mut survivors = 0usize;
                    for item in rows {
                        item?;
                        survivors += 1;
                    }
                    black_box(survivors);
                    Ok(())
                },
            );
            pipeline.run().unwrap();
        })
    });
}

criterion_group!(benches, bench_filter_rename_run);
criterion_main!(benches);
