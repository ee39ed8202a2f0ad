use criterion::{criterion_group, criterion_main, Criterion};
use ktest::{prepare_get, GetCommand, KCtlCommand, KCtlConfig};
use rand::{distributions::Alphanumeric, rngs::SmallRng, Rng, SeedableRng};

// number of distinct keys to get
const NUM_KEYS: usize = 10;
// this seed is used to determine the size of each key
const KEY_SIZE_SEED: u64 = 233;
// this seed is used for generating random keys
const KEY_SEED: u64 = 757;

// `true` accepts any arguments and exits 0, so only the
// cost of assembling arguments and spawning is measured
fn stub_config() -> KCtlConfig {
    KCtlConfig::default().with_program("true")
}

fn get_keys() -> Vec<String> {
    let mut sizes: SmallRng = SeedableRng::seed_from_u64(KEY_SIZE_SEED);
    let mut r: SmallRng = SeedableRng::seed_from_u64(KEY_SEED);
    let mut res = vec![];
    for _ in 0..NUM_KEYS {
        let size = sizes.gen_range(1, 64);
        let key = r.sample_iter(&Alphanumeric).take(size).collect();
        res.push(key);
    }
    res
}

/// Spawn overhead of a prepared get, with and without capture
fn bench_get(c: &mut Criterion) {
    let keys = get_keys();
    let command = prepare_get(stub_config(), "chars").unwrap();

    let mut g = c.benchmark_group("bench_get");

    g.bench_function("get-discard", |b| {
        b.iter(|| {
            for key in &keys {
                assert!(command.run(&[key.as_str()], false).unwrap().success());
            }
        })
    });

    g.bench_function("get-capture", |b| {
        b.iter(|| {
            for key in &keys {
                assert!(command.run(&[key.as_str()], true).unwrap().success());
            }
        })
    });

    g.finish();
}

/// Building the command for every run versus reusing a prepared one
fn bench_construction(c: &mut Criterion) {
    let mut g = c.benchmark_group("bench_construction");

    g.bench_function("prepared", |b| {
        let command = prepare_get(stub_config(), "hex").unwrap();
        b.iter(|| command.args(&["pak"]))
    });

    g.bench_function("fresh", |b| {
        b.iter(|| {
            GetCommand::with_format_name(stub_config(), Some("hex"))
                .unwrap()
                .args(&["pak"])
        })
    });

    g.finish();
}

criterion_group!(group, bench_get, bench_construction);
criterion_main!(group);
