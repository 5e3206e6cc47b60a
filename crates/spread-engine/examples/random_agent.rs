//! Random-policy episode loop.
//!
//! Demonstrates: config → SpreadEnv → seed → reset → sample actions from
//! the environment RNG → step until done → render.
//!
//! Usage: `cargo run --example random_agent -- [episodes] [config.toml]`
//! Set `RUST_LOG=spread_engine=debug` to see per-episode logs.

use std::path::Path;

use rand::Rng;
use spread_engine::{AsciiRenderer, EnvConfig, Renderer, SpreadEnv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let episodes: u64 = match args.next() {
        Some(n) => n.parse()?,
        None => 3,
    };
    let config = match args.next() {
        Some(path) => EnvConfig::from_file(Path::new(&path))?,
        None => EnvConfig::default(),
    };

    let mut env = SpreadEnv::new(config)?;
    let mut renderer = AsciiRenderer::default();
    let n_actions = env.action_space().n as u32;

    println!("=== Spread random agent ===\n");
    for episode in 0..episodes {
        let [seed, derived] = env.seed(episode);
        env.reset();
        println!("Episode {episode} (seeds {seed}, {derived})");
        print!("{}", renderer.render(&env.render_frame())?);

        loop {
            let actions: Vec<u32> = (0..env.n_agents())
                .map(|_| env.rng_mut().random_range(0..n_actions))
                .collect();
            let result = env.step_discrete(&actions)?;
            if result.all_done() {
                break;
            }
        }

        print!("{}", renderer.render(&env.render_frame())?);
        println!(
            "steps: {}  rewards: {:?}  last step: {:?}\n",
            env.step_count(),
            env.total_episode_reward(),
            env.last_metrics(),
        );
    }
    Ok(())
}
