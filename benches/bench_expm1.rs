use criterion::Criterion;
use hypermaths::hyperlibm;

use bench_util::{bench_inputs, configure_criterion, gen_range, glibc_expm1};

fn bench_expm1(c: &mut Criterion) {
    let inputs = [-50.0, -10.0, -1.0, -1e-6, 0.0, 1e-20, 1e-6, 0.3, 0.5, 1.0, 10.0, 50.0, 700.0];
    let common = gen_range(1024, -1.0, 1.0, 0x1401);
    let wide = gen_range(1024, -40.0, 700.0, 0x1402);

    let mut group = c.benchmark_group("expm1/smoke");
    bench_inputs(&mut group, &inputs, hyperlibm::expm1, glibc_expm1);
    group.finish();

    let mut group = c.benchmark_group("expm1/common");
    bench_inputs(&mut group, &common, hyperlibm::expm1, glibc_expm1);
    group.finish();

    let mut group = c.benchmark_group("expm1/wide");
    bench_inputs(&mut group, &wide, hyperlibm::expm1, glibc_expm1);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_expm1(&mut c);
    c.final_summary();
}
