//! Offline solver
//!
//! Reads a decision state as JSON, solves it, and prints the averaged
//! strategy alongside the analysis the server would return.

use clap::Parser;
use gtoserve::analysis::Analysis;
use gtoserve::analysis::Style;
use gtoserve::dto::Scenario;
use gtoserve::gameplay::DecisionState;
use gtoserve::service::Solution;
use gtoserve::solver::Payoff;
use gtoserve::solver::Solver;
use gtoserve::solver::SolverConfig;

#[derive(Parser)]
#[command(author, version, about = "Solve a single decision point", long_about = None)]
struct Args {
    /// path to a decision state JSON file, `-` for stdin
    #[arg(required = true)]
    path: String,
    #[arg(long, short, default_value_t = gtoserve::DEFAULT_ITERATIONS)]
    iterations: usize,
    #[arg(long, default_value_t = gtoserve::SOLVER_DEPTH)]
    depth: usize,
    #[arg(long, default_value = "pot")]
    payoff: Payoff,
    #[arg(long)]
    style: Option<String>,
    /// include every visited info set, not just the root
    #[arg(long)]
    full: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let text = match args.path.as_str() {
        "-" => std::io::read_to_string(std::io::stdin())?,
        path => std::fs::read_to_string(path)?,
    };
    let scenario = serde_json::from_str::<Scenario>(&text)?;
    let style = args
        .style
        .as_deref()
        .map(|s| serde_json::from_value::<Style>(serde_json::Value::from(s)))
        .transpose()?;
    let state = DecisionState::try_from(&scenario)?;
    let solver = Solver::from(SolverConfig {
        depth: args.depth,
        payoff: args.payoff,
        ..SolverConfig::default()
    });
    let result = solver.solve(&state, args.iterations)?;
    let solution = Solution::from(&result);
    let analysis = Analysis::new(&state, &solution, style);
    let output = if args.full {
        serde_json::json!({ "result": result, "analysis": analysis })
    } else {
        serde_json::json!({
            "info_set_key": result.root,
            "strategy": solution.strategy,
            "exploitability": result.exploitability,
            "iterations": result.iterations,
            "convergence": result.convergence,
            "analysis": analysis,
        })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
