use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use text_data_benches::{unicode_data, word_break, MEASUREMENT_TIME, WARM_UP_TIME};
use text_data_prepare::word_break::changes;
use text_data_source::{PropertyTable, UnicodeData};

const SIZES: [u32; 3] = [256, 1024, 4096];

#[inline(never)]
fn decompose_all(unicode: &UnicodeData) -> usize
{
    unicode
        .iter()
        .filter_map(|(code, _)| unicode.decompose(code))
        .map(|d| d.len())
        .sum()
}

fn parse(c: &mut Criterion)
{
    let mut group = c.benchmark_group("parse");

    group.warm_up_time(Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME));

    for size in SIZES {
        let data = unicode_data(size);

        group.bench_with_input(BenchmarkId::new("unicode_data", size), &data, |b, data| {
            b.iter(|| UnicodeData::parse(black_box(data)).unwrap())
        });
    }

    let data = word_break();
    group.bench_function("word_break", |b| {
        b.iter(|| PropertyTable::parse(black_box(&data)).unwrap())
    });

    group.finish();
}

fn decompose(c: &mut Criterion)
{
    let mut group = c.benchmark_group("decompose");

    group.warm_up_time(Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME));

    let word_break = PropertyTable::parse(&word_break()).unwrap();

    for size in SIZES {
        let unicode = UnicodeData::parse(&unicode_data(size)).unwrap();

        group.bench_with_input(BenchmarkId::new("decompose", size), &unicode, |b, unicode| {
            b.iter(|| decompose_all(black_box(unicode)))
        });

        group.bench_with_input(
            BenchmarkId::new("word_break_changes", size),
            &(&unicode, &word_break),
            |b, data| b.iter(|| changes(black_box(data.0), data.1)),
        );
    }

    group.finish();
}

criterion_group!(benches, parse, decompose);
criterion_main!(benches);
