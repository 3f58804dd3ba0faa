mod common;

use common::{board, goal_distances, scrambled};
use eight_puzzle::{
    parse_problem, solve, Board, HeuristicKind, Move, Report, SearchEngine, SearchStatus,
    SolverConfig,
};
use proptest::prelude::*;

const FIXTURES: &[&str] = &[
    "1 2 3 4 0 6 7 5 8",
    "1 2 3 4 5 6 0 7 8",
    "4 1 3 0 2 6 7 5 8",
    "0 1 3 4 2 5 7 8 6",
    "1 3 6 5 0 2 4 7 8",
    "5 2 8 4 1 7 0 3 6",
    "8 6 7 2 5 4 3 0 1",
];

#[test]
fn depth_matches_breadth_first_search() {
    let distances = goal_distances();
    let goal = Board::standard_goal();

    for fixture in FIXTURES {
        let initial = board(fixture);
        let expected = distances[&initial];
        for kind in HeuristicKind::ALL {
            let solution = solve(&initial, &goal, &SolverConfig::with_heuristic(kind))
                .unwrap()
                .solution()
                .unwrap();
            assert_eq!(solution.depth, expected, "{fixture} with {kind}");
        }
    }
}

#[test]
fn path_replays_to_goal() {
    let goal = Board::standard_goal();
    for fixture in FIXTURES {
        let initial = board(fixture);
        for kind in HeuristicKind::ALL {
            let solution = solve(&initial, &goal, &SolverConfig::with_heuristic(kind))
                .unwrap()
                .solution()
                .unwrap();
            assert_eq!(solution.path.replay(&initial).unwrap(), Some(goal));
            assert_eq!(solution.path.moves.len(), solution.depth);
            assert_eq!(solution.path.f_trace.len(), solution.depth + 1);
        }
    }
}

#[test]
fn f_trace_is_bounded_by_final_f() {
    let goal = Board::standard_goal();
    for fixture in FIXTURES {
        let initial = board(fixture);
        for kind in HeuristicKind::ALL {
            let result = solve(&initial, &goal, &SolverConfig::with_heuristic(kind)).unwrap();
            let solution = result.solution().unwrap();
            let final_f = solution.path.final_f().unwrap();

            // h is zero at the goal, so the last f is the depth
            assert_eq!(final_f, solution.depth);
            assert!(solution.path.f_trace.iter().all(|&f| f <= final_f));
            assert_eq!(result.goal_node().unwrap().f(), final_f);
        }
    }
}

#[test]
fn f_trace_tracks_g_plus_h() {
    let goal = Board::standard_goal();
    let initial = board("4 1 3 0 2 6 7 5 8");
    let result = solve(&initial, &goal, &SolverConfig::default()).unwrap();
    let solution = result.solution().unwrap();

    let goal_id = result.goal_id().unwrap();
    let mut expected: Vec<usize> = result
        .arena()
        .ancestors(goal_id)
        .map(|node| node.g() + node.h())
        .collect();
    expected.reverse();
    assert_eq!(solution.path.f_trace, expected);
}

#[test]
fn node_count_is_frontier_plus_closed() {
    let goal = Board::standard_goal();
    for fixture in FIXTURES {
        let mut engine = SearchEngine::new(board(fixture), goal, &SolverConfig::default());
        while !engine.step().unwrap().is_terminal() {
            assert_eq!(
                engine.nodes_generated(),
                engine.frontier_len() + engine.closed_len()
            );
        }
        let result = engine.run().unwrap();
        assert_eq!(
            result.nodes_generated(),
            result.frontier_len() + result.closed_len()
        );
        assert_eq!(
            result.solution().unwrap().nodes_generated,
            result.nodes_generated()
        );
    }
}

#[test]
fn hardest_instance_node_counts() {
    let goal = Board::standard_goal();
    let initial = board("8 6 7 2 5 4 3 0 1");
    let manhattan = solve(&initial, &goal, &SolverConfig::default()).unwrap();
    let conflict = solve(
        &initial,
        &goal,
        &SolverConfig::with_heuristic(HeuristicKind::LinearConflict),
    )
    .unwrap();

    assert_eq!(
        manhattan.solution().unwrap().depth,
        conflict.solution().unwrap().depth
    );
    assert_eq!(manhattan.solution().unwrap().depth, 31);
    assert_eq!(manhattan.nodes_generated(), 28_388);
    assert_eq!(conflict.nodes_generated(), 18_014);
}

#[test]
fn non_standard_goal() {
    let problem = parse_problem("1 2 3\n8 0 4\n7 6 5\n\n2 8 1\n0 4 3\n7 6 5\n").unwrap();
    assert!(problem.is_solvable());

    let mut depths = Vec::new();
    for kind in HeuristicKind::ALL {
        let config = SolverConfig::with_heuristic(kind);
        let result = solve(&problem.initial, &problem.goal, &config).unwrap();
        let solution = result.solution().unwrap();
        let replayed = solution.path.replay(&problem.initial).unwrap();
        assert_eq!(replayed, Some(problem.goal));
        depths.push(solution.depth);
    }
    assert_eq!(depths[0], depths[1]);
}

#[test]
fn unsolvable_pair_produces_no_record() {
    let problem = parse_problem("1 2 3\n4 5 6\n8 7 0\n1 2 3\n4 5 6\n7 8 0\n").unwrap();
    assert!(!problem.is_solvable());

    let result = solve(&problem.initial, &problem.goal, &SolverConfig::default()).unwrap();
    assert_eq!(result.status(), SearchStatus::Exhausted);
    assert_eq!(result.frontier_len(), 0);
    assert_eq!(result.nodes_generated(), result.closed_len());
    assert!(result.solution().is_err());
}

#[test]
fn record_for_two_move_scenario() {
    let problem = parse_problem("1 2 3\n4 0 6\n7 5 8\n\n1 2 3\n4 5 6\n7 8 0\n").unwrap();
    let result = solve(
        &problem.initial,
        &problem.goal,
        &SolverConfig::with_heuristic(HeuristicKind::LinearConflict),
    )
    .unwrap();
    let solution = result.solution().unwrap();

    assert_eq!(solution.path.moves, vec![Move::Down, Move::Right]);
    let record = Report::new(&problem, &solution).to_string();
    let lines: Vec<&str> = record.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[3], "");
    assert_eq!(lines[8], "2");
    assert_eq!(lines[10], "D R");
    assert_eq!(lines[11], "2 2 2");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn astar_is_optimal(walk in prop::collection::vec(0usize..4, 0..40)) {
        let initial = scrambled(&walk);
        let expected = goal_distances()[&initial];
        for kind in HeuristicKind::ALL {
            let config = SolverConfig::with_heuristic(kind);
            let result = solve(&initial, &Board::standard_goal(), &config).unwrap();
            let solution = result.solution().unwrap();
            prop_assert_eq!(solution.depth, expected);
            prop_assert_eq!(solution.path.replay(&initial).unwrap(), Some(Board::standard_goal()));
        }
    }
}
