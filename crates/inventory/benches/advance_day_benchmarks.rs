use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{Category, GildedRose, Item, LEGENDARY_QUALITY};

const NAMES: [&str; 6] = [
    "+5 Dexterity Vest",
    "Aged Brie",
    "Elixir of the Mongoose",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured Mana Cake",
];

/// Mixed stock cycling through every category.
fn stock(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let sell_in = (i % 25) as i32 - 5;
            let quality = if Category::classify(name).is_legendary() {
                LEGENDARY_QUALITY
            } else {
                (i % 51) as i32
            };
            Item::new(name, sell_in, quality)
        })
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    gildedrose_observability::init();

    let mut group = c.benchmark_group("advance_day");

    for size in [10usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || GildedRose::new(stock(size)),
                |mut shop| {
                    shop.advance_day();
                    black_box(shop)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance_day);
criterion_main!(benches);
