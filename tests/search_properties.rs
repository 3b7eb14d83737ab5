use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use gridsearch::errors::SearchError;
use gridsearch::grid::{Grid, generate::scatter};
use gridsearch::search::{SearchEngine, Solution, Strategy};


fn random_grid(seed: u64, height: usize, width: usize, density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    scatter(height, width, density, &mut rng).unwrap()
}

/// Replaying the actions from the start must visit exactly the reported cells
fn replays(grid: &Grid, solution: &Solution) -> bool {
    let mut at = grid.start();
    for (action, &cell) in solution.actions().iter().zip(solution.cells()) {
        match action.apply(at) {
            Some(next) if next == cell && !grid.blocked(next) => at = next,
            _ => return false,
        }
    }
    solution.actions().len() == solution.cells().len() && at == grid.goal()
}


proptest! {
    #[test]
    fn strategies_agree_on_reachability_and_cost(
        seed in any::<u64>(),
        height in 1usize..14,
        width in 1usize..14,
        density in 0.0f64..0.45,
    ) {
        let grid = random_grid(seed, height, width, density);

        let dfs = SearchEngine::new(Strategy::DepthFirst).solve(&grid);
        let bfs = SearchEngine::new(Strategy::BreadthFirst).solve(&grid);
        let a_star = SearchEngine::new(Strategy::a_star(&grid)).solve(&grid);

        match (&dfs, &bfs, &a_star) {
            (Ok(dfs), Ok(bfs), Ok(a_star)) => {
                prop_assert!(replays(&grid, dfs));
                prop_assert!(replays(&grid, bfs));
                prop_assert!(replays(&grid, a_star));

                // BFS is optimal under unit costs, A* with an admissible heuristic too
                prop_assert_eq!(a_star.cost(), bfs.cost());
                prop_assert!(dfs.cost() >= bfs.cost());
            }
            (
                Err(SearchError::NoSolution { expanded: d }),
                Err(SearchError::NoSolution { expanded: b }),
                Err(SearchError::NoSolution { expanded: a }),
            ) => {
                prop_assert!(*d <= grid.area());
                prop_assert!(*b <= grid.area());
                prop_assert!(*a <= 4 * grid.area() + 1);
            }
            _ => prop_assert!(false, "strategies disagree: {:?} / {:?} / {:?}", dfs, bfs, a_star),
        }
    }

    #[test]
    fn uninformed_search_expands_each_cell_at_most_once(
        seed in any::<u64>(),
        side in 2usize..12,
        density in 0.0f64..0.4,
    ) {
        let grid = random_grid(seed, side, side, density);

        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let expanded = match SearchEngine::new(strategy).solve(&grid) {
                Ok(solution) => solution.expanded(),
                Err(SearchError::NoSolution { expanded }) => expanded,
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            };
            prop_assert!(expanded <= grid.area());
        }
    }

    #[test]
    fn expansion_limit_is_respected(seed in any::<u64>(), limit in 1usize..20) {
        let grid = random_grid(seed, 10, 10, 0.2);
        let engine = SearchEngine::new(Strategy::a_star(&grid)).with_max_expansions(limit);

        match engine.solve(&grid) {
            Ok(solution) => prop_assert!(solution.expanded() <= limit),
            Err(SearchError::ExpansionLimit { limit: l }) => prop_assert_eq!(l, limit),
            Err(SearchError::NoSolution { expanded }) => prop_assert!(expanded <= limit),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
