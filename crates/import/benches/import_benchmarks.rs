use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use motordesk_import::{parse_csv, parse_price};

fn build_csv(rows: usize, separator: char) -> String {
    let mut csv = format!("codigo{s}modelo{s}descricao{s}estoque{s}precoBase\n", s = separator);
    for i in 0..rows {
        let price = if separator == ';' {
            format!("R$ {}.{:03},{:02}", i % 90 + 1, i % 1000, i % 100)
        } else {
            format!("{}.{:02}", i * 10 + 1, i % 100)
        };
        csv.push_str(&format!(
            "MTR-{i:06}{s}Motor {i}{s}Descricao do motor {i}{s}{stock} un{s}{price}\n",
            s = separator,
            stock = i % 50,
        ));
    }
    csv
}

fn bench_parse_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");
    for rows in [100usize, 1_000, 10_000] {
        for separator in [',', ';'] {
            let csv = build_csv(rows, separator);
            group.throughput(Throughput::Bytes(csv.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("sep_{separator}"), rows),
                &csv,
                |b, csv| b.iter(|| parse_csv(black_box(csv))),
            );
        }
    }
    group.finish();
}

fn bench_parse_price(c: &mut Criterion) {
    c.bench_function("parse_price_brazilian", |b| {
        b.iter(|| parse_price(black_box("R$ 1.234.567,89")))
    });
    c.bench_function("parse_price_plain", |b| {
        b.iter(|| parse_price(black_box("1234567.89")))
    });
}

criterion_group!(benches, bench_parse_csv, bench_parse_price);
criterion_main!(benches);
