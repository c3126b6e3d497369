use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use woocsv_core::ProductRecord;
use woocsv_export::{export, project, read_rows};
use woocsv_products::{AttributeInput, FormKind, ProductFormData, VariationInput, build};

/// Variable product with 5 sizes x 4 colors x 3 fits = 60 variations.
fn variable_form(sku: &str) -> ProductFormData {
    let mut form = ProductFormData::variable();
    form.title = format!("Shirt {sku}");
    form.description = "Soft cotton,\nregular fit".to_string();
    form.category = "Clothing, Shirts".to_string();
    form.sku = sku.to_string();
    form.kind = FormKind::Variable {
        attributes: vec![
            AttributeInput::new("Size", "XS, S, M, L, XL"),
            AttributeInput::new("Color", "Red, Blue, Green, Black"),
            AttributeInput::new("Fit", "Slim, Regular, Loose"),
        ],
        variations: (0..60)
            .map(|i| VariationInput {
                price: format!("{}.99", 10 + i),
                weight: "0.3".to_string(),
                description: format!("variation {i}"),
                image_file_name: None,
            })
            .collect(),
    };
    form
}

fn product_list(products: usize) -> Vec<ProductRecord> {
    (0..products)
        .flat_map(|i| build(&variable_form(&format!("SHIRT-{i}"))))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let form = variable_form("SHIRT-1");

    group.throughput(Throughput::Elements(61));
    group.bench_function("variable_60_variations", |b| {
        b.iter(|| build(black_box(&form)))
    });
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for products in [1usize, 10, 100] {
        let records = product_list(products);
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(BenchmarkId::new("project", products), &records, |b, records| {
            b.iter(|| project(black_box(records), "SHIRT-0"))
        });
        group.bench_with_input(BenchmarkId::new("project_and_write", products), &records, |b, records| {
            b.iter(|| export(black_box(records), "SHIRT-0"))
        });
    }
    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");
    let bytes = match export(&product_list(100), "SHIRT-0") {
        Ok(file) => file.bytes,
        Err(e) => panic!("export failed: {e}"),
    };

    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("read_rows_6100", |b| b.iter(|| read_rows(black_box(&bytes))));
    group.finish();
}

criterion_group!(benches, bench_build, bench_export, bench_import);
criterion_main!(benches);
