use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rewrite_cascade::prelude::*;
use rustfst::prelude::*;
use rustfst::{Label, EPS_LABEL};

fn string_map_rule(pairs: &[(&str, &str, f32)]) -> Lattice {
    let mut fst = Lattice::new();
    let start = fst.add_state();
    fst.set_start(start).unwrap();
    for (input, output, weight) in pairs {
        let ilabels: Vec<Label> = input.bytes().map(|b| b as Label).collect();
        let olabels: Vec<Label> = output.bytes().map(|b| b as Label).collect();
        let len = ilabels.len().max(olabels.len());
        let mut current = start;
        for i in 0..len {
            let next = fst.add_state();
            let il = ilabels.get(i).copied().unwrap_or(EPS_LABEL);
            let ol = olabels.get(i).copied().unwrap_or(EPS_LABEL);
            let w = if i == 0 {
                TropicalWeight::new(*weight)
            } else {
                TropicalWeight::one()
            };
            fst.add_tr(current, Tr::new(il, ol, w, next)).unwrap();
            current = next;
        }
        fst.set_final(current, TropicalWeight::one()).unwrap();
    }
    fst
}

fn lowercase_rule() -> Lattice {
    let mut fst = Lattice::new();
    let s = fst.add_state();
    fst.set_start(s).unwrap();
    fst.set_final(s, TropicalWeight::one()).unwrap();
    for byte in 1u32..=255 {
        let out = if (u32::from(b'A')..=u32::from(b'Z')).contains(&byte) {
            byte + 32
        } else {
            byte
        };
        fst.add_tr(
            s,
            Tr::new(byte as Label, out as Label, TropicalWeight::one(), s),
        )
        .unwrap();
    }
    fst
}

fn digit_cascade() -> RuleCascade<MemoryStore> {
    let pairs: Vec<(&str, &str, f32)> = vec![
        ("0", "zero", 1.0),
        ("1", "one", 1.0),
        ("2", "two", 1.0),
        ("3", "three", 1.0),
        ("4", "four", 1.0),
        ("5", "five", 1.0),
        ("5", "FIVE", 2.0),
        ("6", "six", 1.0),
        ("7", "seven", 1.0),
        ("8", "eight", 1.0),
        ("9", "nine", 1.0),
    ];
    let mut store = MemoryStore::new();
    store.insert("digits", string_map_rule(&pairs));
    store.insert("lowercase", lowercase_rule());
    let mut cascade = RuleCascade::new(store);
    cascade.set_rules(["digits", "lowercase"]).unwrap();
    cascade
}

fn bench_rewrite_operations(c: &mut Criterion) {
    let cascade = digit_cascade();

    let mut group = c.benchmark_group("cascade");
    group.bench_function("rewrites", |b| {
        b.iter(|| cascade.rewrites(black_box("5")).unwrap())
    });
    group.bench_function("top_rewrite", |b| {
        b.iter(|| cascade.top_rewrite(black_box("7")).unwrap())
    });
    group.bench_function("matches", |b| {
        b.iter(|| cascade.matches(black_box("5"), black_box("five")).unwrap())
    });
    group.bench_function("set_rules", |b| {
        b.iter(|| {
            let mut fresh = RuleCascade::new(cascade.store().clone());
            fresh
                .set_rules([black_box("digits"), black_box("lowercase")])
                .unwrap();
            fresh
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rewrite_operations);
criterion_main!(benches);
