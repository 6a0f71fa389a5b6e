use criterion::Criterion;
use hypermaths::hyperlibm;

use bench_util::{bench_inputs, configure_criterion, gen_log_range, gen_range, glibc_asinh};

fn bench_asinh(c: &mut Criterion) {
    let inputs = [-1e10, -100.0, -2.0, -1e-9, 0.0, 1e-9, 1.0, 2.0, 100.0, 1e10, 1e300];
    let common = gen_range(1024, -5.0, 5.0, 0x1101);
    let wide = gen_range(1024, -1e6, 1e6, 0x1102);
    let regimes = gen_log_range(1024, -40, 60, true, 0x1103);

    let mut group = c.benchmark_group("asinh/smoke");
    bench_inputs(&mut group, &inputs, hyperlibm::asinh, glibc_asinh);
    group.finish();

    let mut group = c.benchmark_group("asinh/common");
    bench_inputs(&mut group, &common, hyperlibm::asinh, glibc_asinh);
    group.finish();

    let mut group = c.benchmark_group("asinh/wide");
    bench_inputs(&mut group, &wide, hyperlibm::asinh, glibc_asinh);
    group.finish();

    let mut group = c.benchmark_group("asinh/regimes");
    bench_inputs(&mut group, &regimes, hyperlibm::asinh, glibc_asinh);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_asinh(&mut c);
    c.final_summary();
}
