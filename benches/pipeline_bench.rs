use criterion::{criterion_group, criterion_main, Criterion};
use filter_runner::core::filter::{format_filter_expression, TestFilePatterns};
use filter_runner::core::models::FileEntry;
use filter_runner::core::params::merge_vm_parameters;
use std::collections::BTreeMap;

fn bench_format_filter_expression(c: &mut Criterion) {
    let patterns = TestFilePatterns::compile(&["Test".to_string(), "IT".to_string()]).unwrap();
    let files: BTreeMap<String, FileEntry> = (0..200)
        .map(|i| {
            let path = format!("/project/suites/Case_{:03}_Test.xml", i);
            (path.clone(), FileEntry::file(path, "xml"))
        })
        .collect();

    c.bench_function("format_filter_expression", |b| {
        b.iter(|| format_filter_expression(&files, &patterns));
    });
}

fn bench_merge_vm_parameters(c: &mut Criterion) {
    let existing = "-Xmx512m -ea -Dtests.to.run=*old* -Dfile.encoding=UTF-8";
    let expression = (0..50)
        .map(|i| format!("*Case_{:03}_Test*", i))
        .collect::<Vec<_>>()
        .join(",");

    c.bench_function("merge_vm_parameters", |b| {
        b.iter(|| merge_vm_parameters(existing, &expression));
    });
}

criterion_group!(benches, bench_format_filter_expression, bench_merge_vm_parameters);
criterion_main!(benches);
