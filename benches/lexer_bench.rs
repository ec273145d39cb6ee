use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lisp_lexer::{tokenize, LexerConfig, TokenStream};

fn program(forms: usize) -> String {
    let mut source = String::new();
    for i in 0..forms {
        source.push_str(&format!(
            "(define (f{} x) (if (< x {}) (* x x) (+ x {})))\n",
            i, i, i
        ));
    }
    source
}

fn lexer_benchmark(c: &mut Criterion) {
    let small = "(define answer (+ 40 2))";
    let large = program(1000);

    c.bench_function("tokenize small form", |b| {
        b.iter(|| tokenize(black_box(small)).unwrap())
    });

    c.bench_function("tokenize 1000 forms", |b| {
        b.iter(|| tokenize(black_box(&large)).unwrap())
    });

    let config = LexerConfig::default();
    c.bench_function("tokenize 1000 forms from reader", |b| {
        b.iter(|| {
            TokenStream::from_reader(black_box(large.as_bytes()), &config)
                .unwrap()
                .count()
        })
    });
}

criterion_group!(benches, lexer_benchmark);
criterion_main!(benches);
