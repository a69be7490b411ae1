use diffusion_core::{render, run_scenario, Frame, Grid, ScenarioConfig};

#[test]
fn float_demo_redistributes_interior_source_and_keeps_edge_source() {
    let config = ScenarioConfig::<f32>::float_demo();
    let mut after_step = None;
    let outcome = run_scenario(&config, |frame, grid| {
        if frame == Frame::AfterStep(1) {
            after_step = Some(grid.clone());
        }
    })
    .unwrap();
    let stepped = after_step.expect("step frame observed");

    assert_eq!(outcome.applied, 2);
    assert!(outcome.skipped.is_empty());

    // (4,0) sits on the boundary and is carried through untouched.
    assert_eq!(stepped[(4, 0)], 50.0);
    // (2,2) is interior and its neighbours were all zero.
    assert_eq!(stepped[(2, 2)], 0.0);
    for (r, c) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        assert_eq!(stepped[(r, c)], 25.0, "neighbour ({r}, {c})");
    }
    assert_eq!(stepped.total(), 150.0);

    let grid = &outcome.grid;
    assert_eq!(grid.dimensions(), (6, 6));
    for r in 0..5 {
        for c in 0..5 {
            assert_eq!(grid[(r, c)], stepped[(r, c)]);
        }
    }
    for i in 0..6 {
        assert_eq!(grid[(5, i)], 0.0);
        assert_eq!(grid[(i, 5)], 0.0);
    }
    assert_eq!(grid.sources(), &[100.0, 50.0]);
}

#[test]
fn integer_demo_truncates_spread() {
    let config = ScenarioConfig::<i32>::integer_demo();
    let outcome = run_scenario(&config, |_, _| {}).unwrap();
    assert_eq!(
        outcome.grid.cells(),
        &[
            0, 0, 0, 0, //
            0, 0, 2, 0, //
            0, 2, 0, 0, //
            0, 0, 0, 0,
        ]
    );
}

#[test]
fn manual_sequence_matches_scenario_runner() {
    let mut grid = Grid::<f32>::new(5, 5);
    grid.add_source(100.0);
    grid.add_source(50.0);
    assert_eq!(grid.source_count(), 2);
    assert!(grid.apply_source_at(0, 2, 2));
    assert!(grid.apply_source_at(1, 4, 0));
    grid.step();
    grid.resize(6, 6);

    let outcome = run_scenario(&ScenarioConfig::<f32>::float_demo(), |_, _| {}).unwrap();
    assert_eq!(grid, outcome.grid);
}

#[test]
fn rendered_initial_frame_shows_both_sources() {
    let mut text = String::new();
    run_scenario(&ScenarioConfig::<f32>::float_demo(), |frame, grid| {
        if frame == Frame::Initial {
            text = render(grid, Some(frame.to_string().as_str()));
        }
    })
    .unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "--- Initial grid (step 0) ---");
    assert_eq!(lines[3], "|       0       0     100       0       0 |");
    assert_eq!(lines[5], "|      50       0       0       0       0 |");
}
