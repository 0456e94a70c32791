use criterion::{Criterion, black_box, criterion_group, criterion_main};
use factdb_core::{Converter, parse_fact};

fn synthetic_geobase(states: usize) -> String {
    let mut out = String::new();
    for s in 0..states {
        out.push_str(&format!(
            "state('state {s}','s{s}','capital {s}',{}.0e+3,{}.0e+3,{s},'a','b','c','d').\n",
            s * 100,
            s * 10
        ));
        for c in 0..20 {
            out.push_str(&format!("city('state {s}','s{s}','city {s} {c}',{}).\n", c * 1000));
        }
        out.push_str(&format!(
            "border('state {s}','s{s}',['state {}','state {}']).\n",
            s + 1,
            s + 2
        ));
        out.push_str(&format!("river('river {s}',{s},['state {s}','state {}']).\n", s + 1));
    }
    out
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_fact", |b| {
        b.iter(|| {
            parse_fact(black_box(
                "border('alabama','al',['tennessee','georgia','florida','mississippi']).",
            ))
        })
    });
}

fn convert_benchmark(c: &mut Criterion) {
    let input = synthetic_geobase(500);
    let converter = Converter::geobase();

    c.bench_function("convert_geobase_500_states", |b| {
        b.iter(|| converter.convert_str(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, parse_benchmark, convert_benchmark);
criterion_main!(benches);
