use criterion::Criterion;
use hypermaths::hyperlibm;

use bench_util::{bench_inputs, configure_criterion, gen_log_range, gen_range, glibc_acosh};

fn bench_acosh(c: &mut Criterion) {
    let inputs = [1.0, 1.0 + 1e-12, 1.1, 1.5, 2.0, 10.0, 100.0, 1e6, 1e10, 1e300];
    let common = gen_range(1024, 1.0, 10.0, 0x1201);
    let wide = gen_range(1024, 1.0, 1e6, 0x1202);
    let regimes = gen_log_range(1024, 0, 60, false, 0x1203);

    let mut group = c.benchmark_group("acosh/smoke");
    bench_inputs(&mut group, &inputs, hyperlibm::acosh, glibc_acosh);
    group.finish();

    let mut group = c.benchmark_group("acosh/common");
    bench_inputs(&mut group, &common, hyperlibm::acosh, glibc_acosh);
    group.finish();

    let mut group = c.benchmark_group("acosh/wide");
    bench_inputs(&mut group, &wide, hyperlibm::acosh, glibc_acosh);
    group.finish();

    let mut group = c.benchmark_group("acosh/regimes");
    bench_inputs(&mut group, &regimes, hyperlibm::acosh, glibc_acosh);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_acosh(&mut c);
    c.final_summary();
}
