//! Integration test: full episodes on the standard task and small
//! hand-built scenarios.
//!
//! The centrepiece drives all four agents from the centre of the 6×6
//! grid to the four corners along the corridor, with agent 0 arriving
//! last, and checks observations, shared rewards, and the moment every
//! done flag flips.

use std::io::Write;

use spread_core::{Action, AgentId, Cell, EnvError, StepId};
use spread_engine::{
    BlockReason, EnvConfig, EpisodePhase, MoveOutcome, RewardMode, SpreadEnv, StepResult,
};
use spread_test_utils::fixtures::{corridor_config, default_config, pair_config, ready_env};
use spread_test_utils::{assert_grid_table_consistent, ScriptedPolicy};

use Action::{Down, Left, NoOp, Right, Up};

// ── Helpers ──────────────────────────────────────────────────────────

/// Agent 0 waits one step, then goes right and down to (5,5). The others
/// reach their corners in four steps.
fn corner_scripts() -> ScriptedPolicy {
    ScriptedPolicy::new(vec![
        vec![NoOp, Right, Right, Down, Down],
        vec![Right, Right, Up, Up],
        vec![Left, Left, Down, Down],
        vec![Left, Left, Up, Up],
    ])
}

fn run_script(env: &mut SpreadEnv, policy: &mut ScriptedPolicy) -> Vec<StepResult> {
    (0..policy.horizon())
        .map(|_| {
            let result = env.step(&policy.next_actions()).unwrap();
            assert_grid_table_consistent(env);
            result
        })
        .collect()
}

// ── Standard task ────────────────────────────────────────────────────

#[test]
fn four_agents_reach_the_corners() {
    let mut env = ready_env(default_config());
    let results = run_script(&mut env, &mut corner_scripts());

    assert_eq!(
        env.positions().as_slice(),
        &[
            Cell::new(5, 5),
            Cell::new(0, 5),
            Cell::new(5, 0),
            Cell::new(0, 0)
        ]
    );

    // Nobody is done until the last arrival.
    for r in &results[..4] {
        assert!(r.dones.iter().all(|&d| !d));
    }
    let last = &results[4];
    assert_eq!(last.dones, vec![true; 4]);
    assert_eq!(last.info.step, StepId(5));
    assert_eq!(last.info.phase, EpisodePhase::Terminal);

    let obs: Vec<&[f32]> = last.observations.iter().map(|o| o.as_slice()).collect();
    assert_eq!(
        obs,
        vec![&[1.0, 1.0][..], &[0.0, 1.0], &[1.0, 0.0], &[0.0, 0.0]]
    );
}

#[test]
fn shared_reward_grows_as_corners_fill() {
    let mut env = ready_env(default_config());
    let results = run_script(&mut env, &mut corner_scripts());

    let team: Vec<f32> = results.iter().map(|r| r.rewards[0]).collect();
    assert_eq!(team, vec![0.0, 0.0, 0.0, 3.0, 4.0]);
    for r in &results {
        assert!(r.rewards.iter().all(|&x| x == r.rewards[0]));
    }
    assert_eq!(env.total_episode_reward(), &[7.0; 4]);
}

#[test]
fn sparse_mode_pays_each_bonus_once() {
    let mut env = ready_env(EnvConfig {
        reward_mode: RewardMode::Sparse,
        ..default_config()
    });
    let results = run_script(&mut env, &mut corner_scripts());

    assert_eq!(results[3].rewards, vec![-1.0, 0.0, 0.0, 0.0]);
    assert_eq!(results[4].rewards, vec![0.0, -1.0, -1.0, -1.0]);
    assert_eq!(env.total_episode_reward(), &[-4.0; 4]);
}

#[test]
fn reward_mode_does_not_change_movement() {
    let mut positional = ready_env(default_config());
    let mut sparse = ready_env(EnvConfig {
        reward_mode: RewardMode::Sparse,
        ..default_config()
    });
    let mut a = corner_scripts();
    let mut b = corner_scripts();
    for _ in 0..a.horizon() {
        let ra = positional.step(&a.next_actions()).unwrap();
        let rb = sparse.step(&b.next_actions()).unwrap();
        assert_eq!(ra.observations, rb.observations);
        assert_eq!(ra.dones, rb.dones);
        assert_eq!(ra.info.outcomes, rb.info.outcomes);
    }
}

#[test]
fn idle_episode_ends_at_the_step_ceiling() {
    let mut env = ready_env(default_config());
    for step in 1..50 {
        let r = env.step(&[NoOp; 4]).unwrap();
        assert!(!r.all_done(), "done early at step {step}");
    }
    let r = env.step(&[NoOp; 4]).unwrap();
    assert!(r.all_done());
    assert_eq!(env.step_count(), StepId(50));
    assert_eq!(env.total_episode_reward(), &[0.0; 4]);
}

#[test]
fn reset_after_terminal_starts_over() {
    let mut env = ready_env(default_config());
    run_script(&mut env, &mut corner_scripts());
    assert_eq!(env.phase(), EpisodePhase::Terminal);

    let obs = env.reset();
    assert_eq!(env.phase(), EpisodePhase::Ready);
    assert_eq!(obs[0].as_slice(), &[0.6, 0.6]);
    assert_grid_table_consistent(&env);

    // The same script replays to the same end.
    let results = run_script(&mut env, &mut corner_scripts());
    assert!(results[4].all_done());
}

// ── Ordering and collisions ──────────────────────────────────────────

#[test]
fn follower_cannot_enter_cell_vacated_later() {
    let mut env = ready_env(pair_config(
        [Cell::new(3, 3), Cell::new(3, 4)],
        [Cell::new(0, 0), Cell::new(0, 5)],
        RewardMode::Positional,
    ));
    let r = env.step(&[Right, Right]).unwrap();
    assert_eq!(
        r.info.outcomes[0],
        MoveOutcome::Blocked(BlockReason::Occupied { by: AgentId(1) })
    );
    assert_eq!(
        r.info.outcomes[1],
        MoveOutcome::Moved {
            from: Cell::new(3, 4),
            to: Cell::new(3, 5)
        }
    );
}

#[test]
fn leader_clears_the_way_for_a_later_agent() {
    let mut env = ready_env(pair_config(
        [Cell::new(3, 4), Cell::new(3, 3)],
        [Cell::new(0, 0), Cell::new(0, 5)],
        RewardMode::Positional,
    ));
    env.step(&[Right, Right]).unwrap();
    assert_eq!(
        env.positions().as_slice(),
        &[Cell::new(3, 5), Cell::new(3, 4)]
    );
    assert_grid_table_consistent(&env);
}

#[test]
fn walls_and_edges_block() {
    let mut env = ready_env(pair_config(
        [Cell::new(3, 2), Cell::new(0, 0)],
        [Cell::new(5, 0), Cell::new(5, 5)],
        RewardMode::Positional,
    ));
    let r = env.step(&[Up, Up]).unwrap();
    assert_eq!(r.info.outcomes[0], MoveOutcome::Blocked(BlockReason::Wall));
    assert_eq!(
        r.info.outcomes[1],
        MoveOutcome::Blocked(BlockReason::OutOfBounds)
    );
    assert_eq!(env.last_metrics().blocked(), 2);
}

#[test]
fn arrival_is_collective_in_any_permutation() {
    let mut env = ready_env(corridor_config(4));
    let r = env.step(&[NoOp, NoOp]).unwrap();
    assert_eq!(r.dones, vec![true, true]);
    assert_eq!(r.rewards, vec![2.0, 2.0]);
}

#[test]
fn earlier_agents_finish_on_the_step_after_a_later_arrival() {
    // Agent 0 already sits on its goal; agent 1 completes the team's
    // coverage. Agent 0's done check ran before agent 1 moved.
    let mut env = ready_env(pair_config(
        [Cell::new(0, 0), Cell::new(1, 5)],
        [Cell::new(0, 0), Cell::new(0, 5)],
        RewardMode::Positional,
    ));
    let arrival = env.step(&[NoOp, Up]).unwrap();
    assert_eq!(arrival.dones, vec![false, true]);
    assert_eq!(arrival.info.phase, EpisodePhase::Stepping);
    assert_eq!(arrival.rewards, vec![2.0, 2.0]);

    let next = env.step(&[NoOp, NoOp]).unwrap();
    assert_eq!(next.dones, vec![true, true]);
    assert_eq!(next.info.outcomes[0], MoveOutcome::Stayed);
    assert_eq!(next.info.outcomes[1], MoveOutcome::Skipped);
    assert_eq!(next.info.phase, EpisodePhase::Terminal);
    assert_eq!(next.rewards, vec![2.0, 2.0]);
}

#[test]
fn finished_episode_only_pays_the_step_cost() {
    let mut env = ready_env(corridor_config(4));
    env.step(&[NoOp, NoOp]).unwrap();
    assert_eq!(env.phase(), EpisodePhase::Terminal);
    for _ in 0..3 {
        let r = env.step(&[Right, Left]).unwrap();
        assert_eq!(r.rewards, vec![-1.0, -1.0]);
        assert!(r.info.outcomes.iter().all(|o| *o == MoveOutcome::Skipped));
    }
    assert_eq!(env.total_episode_reward(), &[-1.0, -1.0]);
    assert_eq!(env.step_count(), StepId(4));
}

// ── Error paths ──────────────────────────────────────────────────────

#[test]
fn step_before_reset_is_refused() {
    let mut env = SpreadEnv::new(default_config()).unwrap();
    assert_eq!(env.step(&[NoOp; 4]).unwrap_err(), EnvError::NotReset);
    assert_eq!(
        env.step_discrete(&[4; 4]).unwrap_err(),
        EnvError::NotReset
    );
}

#[test]
fn invalid_action_leaves_state_untouched() {
    let mut env = ready_env(default_config());
    env.step(&[Right, Right, Left, Left]).unwrap();
    let positions = env.positions().clone();
    let grid = env.grid().clone();

    let err = env.step_discrete(&[3, 3, 5, 1]).unwrap_err();
    assert!(matches!(
        err,
        EnvError::InvalidAction {
            agent: AgentId(2),
            ..
        }
    ));
    assert_eq!(err.to_string(), "agent 2: action 5 not found");
    assert_eq!(env.positions(), &positions);
    assert_eq!(env.grid(), &grid);
    assert_eq!(env.step_count(), StepId(1));
}

// ── Configuration ────────────────────────────────────────────────────

#[test]
fn environment_builds_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
rows = 8
cols = 8
n_agents = 2
max_steps = 10
reward_mode = "neg"
"#
    )
    .unwrap();

    let config = EnvConfig::from_file(file.path()).unwrap();
    let mut env = SpreadEnv::new(config).unwrap();
    let obs = env.reset();
    assert_eq!(obs.len(), 2);
    assert_eq!(env.state(), vec![4 * 8 + 4, 3 * 8 + 4]);
    for _ in 0..10 {
        env.step(&[NoOp, NoOp]).unwrap();
    }
    assert_eq!(env.phase(), EpisodePhase::Terminal);
    assert_eq!(env.total_episode_reward(), &[-10.0, -10.0]);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EnvConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, spread_engine::ConfigError::Io(_)));
}
