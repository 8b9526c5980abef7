mod binary;
mod unary;

use criterion::criterion_group;

criterion_group!(benches, binary::basic, unary::basic);
