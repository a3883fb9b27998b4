//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package faxc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use faxc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42\ndef main():\n    let y = x + 1\n    return y\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| b.iter(|| lexer_token_count(black_box("let x = 42\n"))));

    group.bench_function("function_with_body", |b| b.iter(|| lexer_token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = "
def fibonacci(n: i32) -> i32:
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)

contract Token:
    public balance: u64

    def transfer(to: address, amount: u64) -> bool:
        assert amount <= self.balance
        self.balance = self.balance - amount
        emit Transfer(to, amount)
        return True
";

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| b.iter(|| lexer_token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| b.iter(|| lexer_token_count(black_box("let s = \"hello\"\n"))));

    group.bench_function("long_string", |b| {
        let source = "let s = \"This is a longer string that contains some text for benchmarking purposes.\"\n";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| b.iter(|| lexer_token_count(black_box("let x = 123456\n"))));

    group.bench_function("float", |b| b.iter(|| lexer_token_count(black_box("let x = 3.14159\n"))));

    group.bench_function("scientific", |b| b.iter(|| lexer_token_count(black_box("let x = 6.022e23\n"))));

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| lexer_token_count(black_box("let x = 42\n"))));

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("let very_long_variable_name = 42\n")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| lexer_token_count(black_box("let a = 1\nlet b = 2\nlet c = 3\nlet d = 4\nlet e = 5\n")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
