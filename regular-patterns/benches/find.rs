//! cargo bench --bench find
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use regular_patterns::{query::ranges_of, Matcher, OptionIntervalExt, Pattern};

fn feed(items: usize) -> String {
    let mut feed = String::from("<rss><channel><title>Feed</title>\n");
    for i in 0..items {
        feed.push_str(&format!(
            "  <item>\n    <title>Item {i}</title>\n    <link>https://example.com/{i}</link>\n  </item>\n"
        ));
    }
    feed.push_str("</channel></rss>");
    feed
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let hay = feed(100);
    let item = Matcher::new([
        Pattern::text("<item>").call(),
        Pattern::ANY,
        Pattern::text("</item>").call(),
    ])
    .unwrap();
    let item_ic = Matcher::new([
        Pattern::text("<item>").ignore_case(true).call(),
        Pattern::ANY,
        Pattern::text("</item>").ignore_case(true).call(),
    ])
    .unwrap();
    let title_open = Matcher::new([Pattern::text("<title>").call()]).unwrap();
    let title_close = Matcher::new([Pattern::text("</title>").call()]).unwrap();

    assert_eq!(item.find_iter(hay.as_str()).count(), 100);
    c.bench_function("find_iter_items", |b| {
        b.iter(|| item.find_iter(black_box(hay.as_str())).count())
    });

    assert_eq!(item_ic.find_iter(hay.as_str()).count(), 100);
    c.bench_function("find_iter_items_ignore_case", |b| {
        b.iter(|| item_ic.find_iter(black_box(hay.as_str())).count())
    });

    c.bench_function("extract_titles", |b| {
        b.iter(|| {
            item.find_iter(black_box(hay.as_str()))
                .map(|item| item.find(&title_open).between(&title_close).as_str().len())
                .sum::<usize>()
        })
    });

    // Includes compiling the chain on every call
    let patterns = [
        Pattern::text("<item>").call(),
        Pattern::ANY,
        Pattern::text("</item>").call(),
    ];
    c.bench_function("ranges_of_one_shot", |b| {
        b.iter(|| ranges_of(black_box(hay.as_str())).call(&patterns).map(|v| v.len()))
    });

    let repeat = Matcher::new([
        Pattern::text("<").call(),
        Pattern::repeat("/").at_most(1).call(),
        Pattern::text("link>").call(),
    ])
    .unwrap();
    assert_eq!(repeat.find_iter(hay.as_str()).count(), 200);
    c.bench_function("find_iter_repeat", |b| {
        b.iter(|| repeat.find_iter(black_box(hay.as_str())).count())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
