//! Benchmarks for highlight passes.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glint_buffer::{Position, TextBuffer};
use glint_syntax::fallback::CompiledRules;
use glint_syntax::{HighlightConfig, Highlighter, Language, LineIndex};

/// Generates a Python module with imports and `lines` lines of body.
fn generate_python(lines: usize) -> String {
    let mut text = String::from("import os\nfrom collections import OrderedDict\n\n");
    for i in 0..lines {
        match i % 4 {
            0 => text.push_str(&format!("def handler_{i}(value):\n")),
            1 => text.push_str("    path = os.path.join('a', \"b\")  # join\n"),
            2 => text.push_str("    cache = OrderedDict()\n"),
            _ => text.push_str(&format!("    return value + {i}\n")),
        }
    }
    text
}

/// Benchmarks a full structured pass.
fn bench_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("structured_pass");
    let config = HighlightConfig::default();

    for size in [100, 1000, 10000].iter() {
        let text = generate_python(*size);
        group.bench_with_input(BenchmarkId::new("python", size), &text, |b, text| {
            b.iter_with_setup(
                || Highlighter::new(TextBuffer::from(text.as_str()), Language::Python, &config),
                |mut highlighter| black_box(highlighter.highlight()),
            )
        });
    }

    group.finish();
}

/// Benchmarks the regex pass alone, and a pass forced onto it by a parse error.
fn bench_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback_pass");
    let rules = CompiledRules::new(Language::Python);

    for size in [100, 1000, 10000].iter() {
        let text = generate_python(*size);
        let lines = LineIndex::new(&text);
        let symbols = Language::Python.extract_symbols(&text);
        group.bench_with_input(BenchmarkId::new("highlight_basic", size), &text, |b, text| {
            b.iter(|| {
                let mut sink: Vec<(&'static str, Position, Position)> = Vec::new();
                rules.highlight_basic(black_box(text), &lines, &symbols, &mut sink);
                black_box(sink)
            })
        });
    }

    let config = HighlightConfig::default();
    let broken = format!("{}def broken(:\n", generate_python(1000));
    group.bench_function("parse_error_1000", |b| {
        b.iter_with_setup(
            || Highlighter::new(TextBuffer::from(broken.as_str()), Language::Python, &config),
            |mut highlighter| black_box(highlighter.highlight()),
        )
    });

    group.finish();
}

/// Benchmarks import extraction.
fn bench_symbols(c: &mut Criterion) {
    let text = generate_python(10000);
    c.bench_function("extract_symbols_python", |b| {
        b.iter(|| black_box(Language::Python.extract_symbols(black_box(&text))))
    });
}

/// Benchmarks position mapping.
fn bench_line_index(c: &mut Criterion) {
    let text = generate_python(10000);
    let lines = LineIndex::new(&text);
    let mid = text.len() / 2;

    c.bench_function("line_index_build", |b| {
        b.iter(|| black_box(LineIndex::new(black_box(&text))))
    });
    c.bench_function("position_of_offset", |b| {
        b.iter(|| black_box(lines.position_of_offset(&text, black_box(mid))))
    });
}

criterion_group!(
    benches,
    bench_structured,
    bench_fallback,
    bench_symbols,
    bench_line_index
);
criterion_main!(benches);
