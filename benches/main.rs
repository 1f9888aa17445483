#[macro_use]
extern crate criterion;

mod layouts;
mod population;

criterion_group!(
    benches,
    crate::layouts::key_sum,
    crate::layouts::value_sum,
    crate::layouts::size_read,
    crate::population::build
);
criterion_main!(benches);
