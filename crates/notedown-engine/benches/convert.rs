use criterion::{Criterion, criterion_group, criterion_main};
use notedown_engine::{convert, render_html, to_plain_text};

/// Builds a synthetic journal of `entries` dated sections mixing all the
/// block constructs the engine handles.
fn generate_journal(entries: usize) -> String {
    let mut content = String::new();
    for i in 0..entries {
        content.push_str(&format!("# Entry {i}\n\n"));
        content.push_str("Some **bold** prose with a [[Linked Page]] and `inline code`.\n");
        content.push_str("A second soft-wrapped line.\n\n");
        content.push_str("- [x] finished task\n- [ ] open task\n\n");
        content.push_str("1. first\n2. second\n\n");
        content.push_str("> A quoted thought\n> across two lines.\n\n");
        content.push_str("```rust\nfn demo() -> u32 { 42 }\n```\n\n");
        content.push_str("| col a | col b |\n| --- | --- |\n| 1 | 2 |\n\n---\n\n");
    }
    content
}

fn bench_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let content = generate_journal(100);
    group.bench_function("tree", |b| {
        b.iter(|| {
            let doc = convert(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });
    group.bench_function("html", |b| {
        b.iter(|| {
            let html = render_html(std::hint::black_box(&content));
            std::hint::black_box(html);
        });
    });
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let text = to_plain_text(std::hint::black_box(&content));
            std::hint::black_box(text);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_projections);
criterion_main!(benches);
