use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use text_data_benches::{stopword_file, stopword_lists, MEASUREMENT_TIME, WARM_UP_TIME};
use text_data_prepare::output::header;
use text_data_prepare::stopwords::StopwordTable;
use text_data_source::StopwordList;

fn stopwords(c: &mut Criterion)
{
    let mut group = c.benchmark_group("stopwords");

    group.warm_up_time(Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME));

    for words in [100, 1000] {
        let file = stopword_file(words);

        group.bench_with_input(BenchmarkId::new("parse", words), &file, |b, file| {
            b.iter(|| StopwordList::parse("danish", black_box(file)))
        });
    }

    // примерно как в data/snowball: 15 языков по ~200 слов
    for languages in [1, 15] {
        let table = StopwordTable::new(stopword_lists(languages, 200));

        group.bench_with_input(BenchmarkId::new("header", languages), &table, |b, table| {
            b.iter(|| header(black_box(table)))
        });
    }

    group.finish();
}

criterion_group!(benches, stopwords);
criterion_main!(benches);
