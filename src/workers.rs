use crate::Error;
use crate::gameplay::DecisionState;
use crate::solver::Solver;
use crate::solver::SolverResult;
use std::panic::AssertUnwindSafe;

/// Bounded CPU pool that keeps solves off the async reactor.
///
/// Work is queued onto a fixed-size rayon pool and the result comes back
/// through a oneshot channel. A panicking job is reported as a solver error
/// instead of tearing down the worker.
pub struct Pool {
    pool: rayon::ThreadPool,
    solver: Solver,
}

impl Pool {
    pub fn new(workers: usize, solver: Solver) -> Result<Self, Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("solver-{}", i))
            .build()
            .map_err(|e| Error::Solver(e.to_string()))?;
        Ok(Self { pool, solver })
    }
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// run a blocking job on the pool and await its output
    pub async fn run<F, T>(&self, job: F) -> Result<T, Error>
    where
        F: FnOnce() -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.pool.spawn(move || {
            let output = std::panic::catch_unwind(AssertUnwindSafe(job))
                .unwrap_or_else(|_| Err(Error::Solver(String::from("solver worker panicked"))));
            let _ = tx.send(output);
        });
        rx.await
            .map_err(|_| Error::Solver(String::from("solver worker dropped")))?
    }

    pub async fn solve(&self, state: DecisionState, iterations: usize) -> Result<SolverResult, Error> {
        let solver = self.solver;
        self.run(move || solver.solve(&state, iterations)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;
    use crate::cards::Street;
    use crate::gameplay::Seat;

    #[tokio::test]
    async fn solves_off_thread() {
        let pool = Pool::new(2, Solver::default()).unwrap();
        let state = DecisionState::new(
            Street::Pref,
            3.0,
            Board::empty(),
            vec![
                Seat::new(0, 99.0).hole(Hole::try_from("AhAd").ok()).invested(1.0),
                Seat::new(1, 98.0).invested(2.0),
            ],
            0,
        );
        let result = pool.solve(state, 200).await.unwrap();
        assert!(result.iterations > 0);
        assert!(pool.workers() == 2);
    }

    #[tokio::test]
    async fn panics_become_errors() {
        let pool = Pool::new(1, Solver::default()).unwrap();
        let outcome = pool.run(|| -> Result<(), Error> { panic!("boom") }).await;
        assert!(matches!(outcome, Err(Error::Solver(_))));
        let after = pool.run(|| Ok(7)).await.unwrap();
        assert!(after == 7);
    }
}
