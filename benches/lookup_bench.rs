use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nanpgeo::{
    AreaCodeRecord, AreaCodeTable, BlockRecord, BlockTable, ExchangeRecord, ExchangeTable,
    NumberLocator, ReferenceTables,
};

/// Builds a registry snapshot big enough that the maps do real work:
/// a hundred NPAs, most of them US with a full complement of exchanges,
/// the rest Canadian, and a sprinkling of reallocated blocks.
fn setup_locator() -> NumberLocator {
    let mut area_codes = AreaCodeTable::new();
    let mut exchanges = ExchangeTable::new();
    let mut blocks = BlockTable::new();

    for npa in 200u32..300 {
        let npa = npa.to_string();
        if npa.starts_with("25") {
            area_codes.insert(&npa, AreaCodeRecord::new("CA", "BC", "P"));
            continue;
        }
        area_codes.insert(&npa, AreaCodeRecord::new("US", "NY", "E"));

        for nxx in 200u32..1000 {
            let nxx = nxx.to_string();
            exchanges.insert(
                &npa,
                &nxx,
                ExchangeRecord::new("NWYRCYZN01", "VERIZON NEW YORK INC.", "9104"),
            );
            if nxx.ends_with("63") {
                blocks.insert(
                    &npa,
                    &nxx,
                    "7",
                    BlockRecord::new("NWYRCYZN07", "T-MOBILE USA, INC.", "6529"),
                );
            }
        }
    }

    NumberLocator::new(ReferenceTables::new(area_codes, exchanges, blocks))
}

/// A mixed workload: plain US lookups, a separator-laden input, a pooled
/// block, a Canadian number and the failure paths.
fn setup_numbers() -> Vec<&'static str> {
    vec![
        "2128675309",
        "(212) 867-5309",
        "2124637890",
        "2508675309",
        "9998675309",
        "2121115309",
    ]
}

fn lookup_benchmark(c: &mut Criterion) {
    let locator = setup_locator();
    let numbers = setup_numbers();

    c.bench_function("locate_number", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = black_box(locator.locate_number(black_box(number)));
            }
        })
    });

    c.bench_function("is_potentially_valid_number", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = black_box(locator.is_potentially_valid_number(black_box(number)));
            }
        })
    });

    c.bench_function("has_us_area_code", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = black_box(locator.has_us_area_code(black_box(number)));
            }
        })
    });
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
