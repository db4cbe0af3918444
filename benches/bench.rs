use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use twosat::graph::directed::DirectedGraph;
use twosat::graph::kosaraju::Kosaraju;
use twosat::sat::generator::random_formula;
use twosat::sat::two_sat::{TwoSat, build};

fn cycle(n: u32) -> DirectedGraph<u32> {
    DirectedGraph::from_edges((1..=n).map(|v| (v, v % n + 1)))
}

fn bench_kosaraju_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("kosaraju_cycle");

    for n in [1_000, 10_000, 100_000] {
        let mut graph = cycle(n);
        let mut kosaraju = Kosaraju::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(kosaraju.decompose(&mut graph)));
        });
    }

    group.finish();
}

fn bench_kosaraju_implication_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("kosaraju_implication_graph");

    for vars in [1_000_u32, 10_000, 100_000] {
        let formula = random_formula(vars, vars as usize, 42);
        let mut graph = build(&formula.clauses);
        let mut kosaraju = Kosaraju::new();
        group.bench_with_input(BenchmarkId::from_parameter(vars), &vars, |b, _| {
            b.iter(|| black_box(kosaraju.decompose(&mut graph)));
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sat_solve");

    // Around a clause/variable ratio of 1, random 2-SAT switches from mostly
    // satisfiable to mostly unsatisfiable.
    for (vars, clauses) in [(10_000_u32, 5_000), (10_000, 10_000), (10_000, 20_000)] {
        let formula = random_formula(vars, clauses, 7);
        group.bench_with_input(
            BenchmarkId::new(format!("{vars}_vars"), clauses),
            &formula,
            |b, formula| {
                b.iter(|| {
                    let mut solver = TwoSat::new(black_box(formula.clone()));
                    black_box(solver.solve())
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(20);
    targets = bench_kosaraju_cycle, bench_kosaraju_implication_graph, bench_solve
}
criterion_main!(benches);
