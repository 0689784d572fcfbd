use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlforge::{TemplateEngine, Value};

/// Build a template with `n` typed placeholders and its matching arguments:
/// SELECT * FROM t WHERE col0 = ?d AND col1 = ?d ...
fn select_template(n: usize) -> (String, Vec<Value>) {
    let mut template = String::from("SELECT * FROM t WHERE ");
    let mut args = Vec::with_capacity(n);
    for i in 0..n {
        if i > 0 {
            template.push_str(" AND ");
        }
        template.push_str(&format!("col{i} = ?d"));
        args.push(Value::Int(i as i64));
    }
    (template, args)
}

fn bench_build_query(c: &mut Criterion) {
    let engine = TemplateEngine::mysql();
    let mut group = c.benchmark_group("template/build_query");

    for n in [1, 5, 10, 50, 100] {
        let (template, args) = select_template(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(engine.build_query(&template, &args).unwrap()));
        });
    }

    group.finish();
}

fn bench_validate_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/validate");

    for n in [1, 10, 100] {
        let (template, _) = select_template(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &template, |b, template| {
            b.iter(|| black_box(sqlforge::validate::validate(template)));
        });
    }

    group.finish();
}

fn bench_array_rendering(c: &mut Criterion) {
    let engine = TemplateEngine::mysql();
    let mut group = c.benchmark_group("template/in_list");

    for n in [5usize, 20, 100, 500] {
        let values = Value::from((0..n as i64).collect::<Vec<_>>());
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                black_box(
                    engine
                        .build_query(
                            "SELECT * FROM t WHERE id IN (?a)",
                            std::slice::from_ref(values),
                        )
                        .unwrap(),
                )
            });
        });
    }

    group.finish();
}

fn bench_conditional_blocks(c: &mut Criterion) {
    let engine = TemplateEngine::mysql();
    let template = "SELECT * FROM t WHERE a = ?d {AND b = ?d} {AND c = ?d}";
    let rendered = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    let skipped = vec![
        Value::Int(1),
        Value::String(engine.skip_marker().to_string()),
        Value::String(engine.skip_marker().to_string()),
    ];

    let mut group = c.benchmark_group("template/blocks");
    group.bench_function("rendered", |b| {
        b.iter(|| black_box(engine.build_query(template, &rendered).unwrap()));
    });
    group.bench_function("skipped", |b| {
        b.iter(|| black_box(engine.build_query(template, &skipped).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query,
    bench_validate_only,
    bench_array_rendering,
    bench_conditional_blocks
);
criterion_main!(benches);
