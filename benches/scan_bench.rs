use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tmplscan::scanner::{FileIndex, IndicatorTables, TemplateScanner};

fn synthetic_template() -> TempDir {
    let dir = TempDir::new().unwrap();
    let write = |rel: &str| {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    };

    write("pyproject.toml");
    write("uv.lock");
    write("README.md");
    for module in 0..20 {
        write(&format!("app/module_{}/api/router.py", module));
        write(&format!("app/module_{}/services/service.py", module));
        write(&format!("app/module_{}/db/session.py", module));
        write(&format!("app/module_{}/models.py", module));
        write(&format!("node_modules/pkg_{}/index.js", module));
    }
    dir
}

fn bench_index(c: &mut Criterion) {
    let dir = synthetic_template();
    let tables = IndicatorTables::default();

    c.bench_function("file_index_build", |b| {
        b.iter(|| black_box(FileIndex::build(black_box(dir.path()), &tables).unwrap()));
    });
}

fn bench_generate(c: &mut Criterion) {
    let dir = synthetic_template();
    let scanner = TemplateScanner::new(dir.path()).unwrap();

    c.bench_function("generate_summary", |b| {
        b.iter(|| black_box(scanner.generate("bench", Some("benchmark app")).unwrap()));
    });
}

fn bench_scan_missing_root(c: &mut Criterion) {
    c.bench_function("validate_missing_root", |b| {
        b.iter(|| black_box(TemplateScanner::new(Path::new(black_box("/no/such/template"))).is_err()));
    });
}

criterion_group!(benches, bench_index, bench_generate, bench_scan_missing_root);
criterion_main!(benches);
