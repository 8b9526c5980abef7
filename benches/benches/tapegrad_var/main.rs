mod ops;
mod propagate;

use criterion::criterion_main;

criterion_main!(ops::benches, propagate::benches);
