use super::key::InfoSetKey;
use super::payoff::Payoff;
use super::result::SolverResult;
use super::table::InfoSetTable;
use crate::Error;
use crate::Probability;
use crate::Utility;
use crate::ValidationError;
use crate::gameplay::DecisionState;
use crate::gameplay::Edge;

/// Tunables for a solve. Defaults mirror the crate constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub depth: usize,
    pub interval: usize,
    pub epsilon: Utility,
    pub payoff: Payoff,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depth: crate::SOLVER_DEPTH,
            interval: crate::SAMPLE_INTERVAL,
            epsilon: crate::CONVERGENCE_EPSILON,
            payoff: Payoff::default(),
        }
    }
}

/// A reachable decision point in the expanded tree.
/// Parents always precede their children.
struct Point {
    handle: usize,
    parent: Option<(usize, Edge)>,
    utility: [Utility; Edge::N],
}

/// Regret-matching self-play over the decision points reachable from a root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl From<SolverConfig> for Solver {
    fn from(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Solver {
    pub fn solve(&self, state: &DecisionState, iterations: usize) -> Result<SolverResult, Error> {
        if iterations == 0 {
            return Err(ValidationError::Iterations {
                got: iterations,
                max: crate::MAX_ITERATIONS,
            }
            .into());
        }
        let root = state.perspective();
        let key = InfoSetKey::from(&root);
        let live = root.seats().iter().filter(|s| s.is_live()).count();
        if !root.is_decision() || live < 2 {
            log::debug!("no decision at {}, returning fallback", key);
            return Ok(SolverResult::fallback(key));
        }
        let start = std::time::Instant::now();
        let mut table = InfoSetTable::default();
        let points = self.expand(&root, &mut table)?;
        let mut reach = vec![0.0 as Probability; points.len()];
        let mut convergence = Vec::new();
        let mut executed = 0;
        for t in 1..=iterations {
            let strategy = table.snapshot();
            for (i, point) in points.iter().enumerate() {
                reach[i] = match point.parent {
                    None => 1.0,
                    Some((p, edge)) => reach[p] * strategy[points[p].handle].weight(edge),
                };
            }
            for (point, reach) in points.iter().zip(reach.iter()) {
                table
                    .node_mut(point.handle)
                    .accumulate(&point.utility, &strategy[point.handle], *reach);
            }
            executed = t;
            if t % self.config.interval == 0 || t == iterations {
                let exploitability = table.exploitability(t);
                convergence.push(exploitability);
                if exploitability < self.config.epsilon {
                    break;
                }
            }
        }
        let result = SolverResult {
            root: key,
            strategy: table.averages(),
            exploitability: convergence.last().copied().unwrap_or(1.0),
            iterations: executed,
            convergence,
            infos: table.len(),
            nodes: points.len(),
        };
        log::info!(
            "solved {} in {:?} ({} iterations, exploitability {:.5})",
            result.root,
            start.elapsed(),
            result.iterations,
            result.exploitability
        );
        Ok(result)
    }

    /// breadth-first expansion down to the configured depth
    fn expand(&self, root: &DecisionState, table: &mut InfoSetTable) -> Result<Vec<Point>, Error> {
        let mut points = Vec::new();
        let mut frontier = vec![(root.clone(), None)];
        for depth in 0..=self.config.depth {
            let mut next = Vec::new();
            for (state, parent) in frontier {
                let index = points.len();
                points.push(self.point(&state, parent, table)?);
                if depth < self.config.depth {
                    next.extend(
                        state
                            .successors()
                            .into_iter()
                            .filter(|(_, child)| child.is_decision())
                            .map(|(edge, child)| (child, Some((index, edge)))),
                    );
                }
            }
            frontier = next;
        }
        Ok(points)
    }

    fn point(
        &self,
        state: &DecisionState,
        parent: Option<(usize, Edge)>,
        table: &mut InfoSetTable,
    ) -> Result<Point, Error> {
        let utility = self.config.payoff.utilities(state);
        if utility.iter().any(|u| !u.is_finite()) {
            return Err(Error::Solver(format!("non-finite utility at {}", state)));
        }
        Ok(Point {
            handle: table.handle(InfoSetKey::from(state)),
            parent,
            utility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::solver::Policy;
    use crate::cards::Hole;
    use crate::cards::Street;
    use crate::gameplay::Seat;

    fn preflop(hole: &str) -> DecisionState {
        DecisionState::new(
            Street::Pref,
            3.0,
            Board::empty(),
            vec![
                Seat::new(0, 99.0).hole(Hole::try_from(hole).ok()).invested(1.0),
                Seat::new(1, 98.0).hole(Hole::try_from("7c2d").ok()).invested(2.0),
            ],
            0,
        )
    }

    fn is_distribution(policy: &Policy) -> bool {
        let sum = policy.weights().iter().sum::<Probability>();
        (sum - 1.0).abs() <= 1e-9 && policy.weights().iter().all(|p| *p >= 0.0)
    }

    #[test]
    fn pocket_aces_raise() {
        let result = Solver::default().solve(&preflop("AhAd"), 1000).unwrap();
        let (policy, prior) = result.root_policy();
        assert!(!prior);
        assert!(policy.weight(Edge::Raise) >= 0.6);
        assert!(policy.best().0 == Edge::Raise);
    }

    #[test]
    fn every_strategy_is_a_distribution() {
        for payoff in [Payoff::PotFraction, Payoff::Equity] {
            let solver = Solver::from(SolverConfig {
                payoff,
                ..SolverConfig::default()
            });
            let result = solver.solve(&preflop("Td9d"), 700).unwrap();
            assert!(!result.strategy.is_empty());
            assert!(result.strategy.values().all(is_distribution));
        }
    }

    #[test]
    fn convergence_is_non_increasing_and_stops_early() {
        let result = Solver::default().solve(&preflop("KsQs"), 5000).unwrap();
        let history = &result.convergence;
        assert!(!history.is_empty());
        assert!(history.windows(2).all(|w| w[1] <= w[0] + 1e-12));
        assert!(history.iter().all(|e| (0.0..=1.0).contains(e)));
        assert!(result.iterations < 5000);
        assert!(result.exploitability < crate::CONVERGENCE_EPSILON);
        assert!(result.iterations % crate::SAMPLE_INTERVAL == 0);
    }

    #[test]
    fn final_iteration_is_always_sampled() {
        let result = Solver::default().solve(&preflop("AhAd"), 150).unwrap();
        assert!(result.iterations == 150);
        assert!(result.convergence.len() == 2);
        assert!(result.exploitability == result.convergence[1]);
    }

    #[test]
    fn terminal_root_falls_back_to_uniform() {
        let state = preflop("AhAd").with_terminal(true);
        let result = Solver::default().solve(&state, 100).unwrap();
        assert!(result.exploitability == 1.0);
        assert!(result.strategy.is_empty());
        assert!(result.root_policy() == (Policy::uniform(), true));
    }

    #[test]
    fn single_live_seat_falls_back() {
        let mut seats = preflop("AhAd").seats().to_vec();
        seats[1].folded = true;
        let state = DecisionState::new(Street::Pref, 3.0, Board::empty(), seats, 0);
        let result = Solver::default().solve(&state, 100).unwrap();
        assert!(result.exploitability == 1.0);
    }

    #[test]
    fn opponent_cards_do_not_change_the_solve() {
        let a = Solver::default().solve(&preflop("AhAd"), 300).unwrap();
        let mut seats = preflop("AhAd").seats().to_vec();
        seats[1].hole = Hole::try_from("KcKd").ok();
        let b = Solver::default()
            .solve(&DecisionState::new(Street::Pref, 3.0, Board::empty(), seats, 0), 300)
            .unwrap();
        assert!(a.root == b.root);
        assert!(a.strategy.keys().eq(b.strategy.keys()));
    }

    #[test]
    fn unvisited_info_sets_are_absent() {
        let result = Solver::default().solve(&preflop("AhAd"), 100).unwrap();
        let river = serde_json::from_value::<InfoSetKey>(serde_json::json!(
            "river|AA|-|3.00|///"
        ))
        .unwrap();
        assert!(result.policy(&river).is_none());
        assert!(result.policy(&result.root).is_some());
        assert!(result.infos <= result.nodes);
    }

    #[test]
    fn depth_bounds_the_tree() {
        let shallow = Solver::from(SolverConfig {
            depth: 0,
            ..SolverConfig::default()
        })
        .solve(&preflop("AhAd"), 100)
        .unwrap();
        assert!(shallow.nodes == 1);
        let deep = Solver::default().solve(&preflop("AhAd"), 100).unwrap();
        assert!(deep.nodes > 1);
        assert!(deep.nodes <= 1 + Edge::N + Edge::N * Edge::N);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert!(Solver::default().solve(&preflop("AhAd"), 0).is_err());
    }
}
