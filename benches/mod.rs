
use criterion::criterion_main;

criterion_main!(pricing_bench::benches, chain_bench::benches);
