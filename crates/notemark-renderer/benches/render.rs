//! Benchmarks for document conversion.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use notemark_renderer::{BuiltinLabels, Converter, RenderOptions};

/// Generate markdown with sections, macros, notecards and code samples.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::with_capacity(sections * 400);
    md.push_str("# Reference\n\n{{ Sidebar(\"API\") }}\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str("See {{ jsxref(\"Array\") }} for **details** and *context*.\n\n");
        md.push_str("> **Note:** Notes are rendered as cards.\n\n");
        md.push_str("> **Callout:**\n>\n> Callouts drop their label.\n\n");
        md.push_str("> A plain quote.\n\n");
        md.push_str("```js-nolint example-good\nconst x = [1, 2, 3].map((n) => n * 2);\n```\n\n");
        md.push_str("- `term`\n- : Definition text.\n\n");
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let converter = Converter::new(BuiltinLabels);
    let options = RenderOptions::default();

    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| converter.render("# Hello\n\nSimple content.", &options));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let converter = Converter::new(BuiltinLabels);
    let options = RenderOptions::default();

    let mut group = c.benchmark_group("render_by_size");

    for sections in [5, 20, 100] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s")),
            &markdown,
            |b, md| b.iter(|| converter.render(md, &options)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_simple, bench_render_varying_sizes);
criterion_main!(benches);
