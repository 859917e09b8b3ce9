use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wagebargain::sensitivity::{assess_robustness, RobustnessOptions};
use wagebargain::{calculate_negotiation_plan, BargainingProblem, NegotiationInputs};

fn reference_inputs() -> NegotiationInputs {
    NegotiationInputs::new("strong")
        .negotiation_breakdown_cost(8000.0)
        .local_minimum_wage(2490.0)
}

fn bench_plan(c: &mut Criterion) {
    let inputs = reference_inputs();
    c.bench_function("plan_reference", |b| {
        b.iter(|| calculate_negotiation_plan(black_box(&inputs)))
    });

    // Wide search range: the lattice grows with the breakdown cost.
    let wide = NegotiationInputs::new("strongest")
        .negotiation_breakdown_cost(150_000.0)
        .worker_ideal_wage(150_000.0);
    c.bench_function("plan_wide_range", |b| {
        b.iter(|| calculate_negotiation_plan(black_box(&wide)))
    });
}

fn bench_robustness(c: &mut Criterion) {
    let problem = BargainingProblem::new(reference_inputs());
    let options = RobustnessOptions::default().with_draws(1_000).with_seed(11);
    c.bench_function("robustness_1000_draws", |b| {
        b.iter(|| assess_robustness(black_box(&problem), &options))
    });
}

criterion_group!(benches, bench_plan, bench_robustness);
criterion_main!(benches);
