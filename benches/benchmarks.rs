criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_preflop_root,
        solving_flop_root_with_equity,
        deriving_info_set_key,
        canonicalizing_cache_key,
        scoring_hand_strength,
}

fn preflop() -> Scenario {
    serde_json::from_value(serde_json::json!({
        "street": "preflop",
        "pot": 3,
        "players": [
            { "hole_cards": "AhKh", "stack": 99, "invested": 1, "position": "SB" },
            { "stack": 98, "invested": 2, "position": "BB" }
        ],
        "current_player": 0
    }))
    .expect("valid scenario")
}

fn flop() -> Scenario {
    serde_json::from_value(serde_json::json!({
        "street": "flop",
        "pot": 12,
        "community_cards": "Qh7h2c",
        "players": [
            { "hole_cards": "AhKh", "stack": 94, "invested": 6, "position": "BTN" },
            { "stack": 94, "invested": 6, "position": "BB" },
            { "stack": 100, "invested": 0, "position": "SB", "folded": true }
        ],
        "current_player": 0
    }))
    .expect("valid scenario")
}

fn solving_preflop_root(c: &mut criterion::Criterion) {
    let state = DecisionState::try_from(&preflop()).expect("valid state");
    let solver = Solver::default();
    c.bench_function("solve a preflop root for 1000 iterations", |b| {
        b.iter(|| solver.solve(&state, 1000))
    });
}

fn solving_flop_root_with_equity(c: &mut criterion::Criterion) {
    let state = DecisionState::try_from(&flop()).expect("valid state");
    let solver = Solver::from(SolverConfig {
        payoff: Payoff::Equity,
        ..SolverConfig::default()
    });
    c.bench_function("solve a flop root with equity payoffs", |b| {
        b.iter(|| solver.solve(&state, 1000))
    });
}

fn deriving_info_set_key(c: &mut criterion::Criterion) {
    let state = DecisionState::try_from(&flop()).expect("valid state");
    c.bench_function("derive an InfoSetKey", |b| {
        b.iter(|| InfoSetKey::from(&state))
    });
}

fn canonicalizing_cache_key(c: &mut criterion::Criterion) {
    let scenario = flop();
    c.bench_function("canonicalize and hash a CacheKey", |b| {
        b.iter(|| CacheKey::from((&scenario, 5000)))
    });
}

fn scoring_hand_strength(c: &mut criterion::Criterion) {
    c.bench_function("score a random flop Strength", |b| {
        b.iter(|| {
            let hole = Hole::random();
            let board = Board::try_from("Qh7h2c").expect("valid board");
            Strength::from((Some(&hole), &board))
        })
    });
}

use gtoserve::Arbitrary;
use gtoserve::cache::CacheKey;
use gtoserve::cards::Board;
use gtoserve::cards::Hole;
use gtoserve::cards::Strength;
use gtoserve::dto::Scenario;
use gtoserve::gameplay::DecisionState;
use gtoserve::solver::InfoSetKey;
use gtoserve::solver::Payoff;
use gtoserve::solver::Solver;
use gtoserve::solver::SolverConfig;
