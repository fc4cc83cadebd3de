//! Benchmarking METAR decoding
extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use metar::prelude::*;

fn benchmark(c: &mut Criterion) {
    let decoder =
        Decoder::default().with_reference(Epoch::from_gregorian_utc_at_midnight(2026, 10, 17));

    let mut decoding_grp = c.benchmark_group("decoding");

    decoding_grp.bench_function("KSAN", |b| {
        b.iter(|| {
            decoder
                .decode(black_box(
                    "KSAN 101651Z 21005KT 10SM CLR 21/13 A3006 RMK AO2 SLP177 T02110128",
                ))
                .unwrap();
        })
    });

    decoding_grp.bench_function("KJFK", |b| {
        b.iter(|| {
            decoder.decode(black_box(
                "SPECI KJFK 171856Z 31015G25KT 1 1/2SM R04R/2600FT +TSRA BR FEW005 BKN008CB OVC015 18/17 A2981 RMK AO2 PK WND 30035/1850 P0045 T01830172",
            ))
            .unwrap();
        })
    });

    decoding_grp.bench_function("summary", |b| {
        let obs = decoder
            .decode("METAR LFPG 170930Z 24012G22KT 210V270 9999 -RA BKN014 OVC030 12/10 Q1009 NOSIG")
            .unwrap();
        b.iter(|| Summary::new(0, black_box(&obs)))
    });

    decoding_grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
