//! Headless drag replay.
//!
//! Usage: `cargo run --bin drag_replay -- --script drag.json [--config arena.json]`
//!
//! Runs a scripted sequence of pointer events and ticks through the control
//! pipeline and prints one JSON line per tick to stdout.
//!
//! Script format:
//!
//! ```json
//! {
//!   "dt": 0.016666,
//!   "steps": [
//!     { "down": { "x": 200, "y": 600 } },
//!     { "move": { "x": 250, "y": 600 } },
//!     { "tick": 30 },
//!     "up",
//!     { "tick": 5 }
//!   ]
//! }
//! ```

use std::io::Write;

use anyhow::{Context, bail};
use capsule_arena_engine::config::ArenaConfig;
use capsule_arena_engine::session::ArenaSession;
use serde::Deserialize;

fn default_dt() -> f32 {
    1.0 / 60.0
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReplayStep {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Run this many ticks
    Tick(u32),
}

#[derive(Debug, Clone, Deserialize)]
struct ReplayScript {
    #[serde(default = "default_dt")]
    dt: f32,
    /// Optional inline config; `--config` takes precedence
    #[serde(default)]
    config: Option<ArenaConfig>,
    steps: Vec<ReplayStep>,
}

impl ReplayScript {
    fn parse(text: &str) -> anyhow::Result<Self> {
        let script: ReplayScript = serde_json::from_str(text).context("parsing replay script")?;
        if !(script.dt > 0.0 && script.dt.is_finite()) {
            bail!("script dt must be positive, got {}", script.dt);
        }
        if let Some(config) = &script.config {
            config.validate().context("inline config")?;
        }
        Ok(script)
    }
}

/// Run every step, writing one JSON line per tick.
fn run(script: &ReplayScript, config: ArenaConfig, out: &mut impl Write) -> anyhow::Result<u64> {
    let mut session = ArenaSession::new(config);
    for step in &script.steps {
        match *step {
            ReplayStep::Down { x, y } => {
                session.on_pointer_down(x, y);
            }
            ReplayStep::Move { x, y } => {
                session.on_pointer_move(x, y);
            }
            ReplayStep::Up => {
                session.on_pointer_up();
            }
            ReplayStep::Tick(count) => {
                for _ in 0..count {
                    let frame = session.tick(script.dt);
                    serde_json::to_writer(&mut *out, &frame)?;
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(session.tick_count())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .skip_while(|a| a.as_str() != flag)
        .nth(1)
        .map(String::as_str)
}

fn main() -> anyhow::Result<()> {
    let default = "warn,capsule_arena_engine=info";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    let Some(script_path) = arg_value(&args, "--script") else {
        bail!("usage: drag_replay --script <path> [--config <path>]");
    };

    log::info!("[replay] loading script: {script_path}");
    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("reading script {script_path}"))?;
    let script = ReplayScript::parse(&text)?;

    let config = match arg_value(&args, "--config") {
        Some(path) => ArenaConfig::load(path).with_context(|| format!("loading config {path}"))?,
        None => script.config.clone().unwrap_or_default(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let ticks = run(&script, config, &mut out)?;
    log::info!("[replay] complete: {ticks} ticks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_arena_engine::config::MotionMode;

    #[test]
    fn test_parse_script_steps() {
        let script = ReplayScript::parse(
            r#"{ "steps": [ { "down": { "x": 1, "y": 2 } }, { "move": { "x": 3, "y": 4 } }, { "tick": 2 }, "up" ] }"#,
        )
        .unwrap();
        assert_eq!(script.dt, default_dt());
        assert!(script.config.is_none());
        assert_eq!(
            script.steps,
            vec![
                ReplayStep::Down { x: 1.0, y: 2.0 },
                ReplayStep::Move { x: 3.0, y: 4.0 },
                ReplayStep::Tick(2),
                ReplayStep::Up,
            ]
        );
    }

    #[test]
    fn test_rejects_zero_dt() {
        assert!(ReplayScript::parse(r#"{ "dt": 0.0, "steps": [] }"#).is_err());
    }

    #[test]
    fn test_run_with_huge_dt_finishes() {
        let script = ReplayScript::parse(r#"{ "dt": 3e6, "steps": [ { "tick": 3 } ] }"#).unwrap();
        let mut out = Vec::new();
        let ticks = run(&script, ArenaConfig::default(), &mut out).unwrap();
        assert_eq!(ticks, 3);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_run_writes_one_line_per_tick() {
        let script = ReplayScript::parse(
            r#"{ "steps": [ { "down": { "x": 0, "y": 0 } }, { "move": { "x": 50, "y": 0 } },
                            { "tick": 3 }, "up", { "tick": 2 } ] }"#,
        )
        .unwrap();
        let mut config = ArenaConfig::default();
        config.motion.mode = MotionMode::Kinematic;

        let mut out = Vec::new();
        let ticks = run(&script, config, &mut out).unwrap();
        assert_eq!(ticks, 5);

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 5);
        let x = |i: usize| lines[i]["position"][0].as_f64().unwrap();
        assert!((x(2) - 0.27).abs() < 1e-5);
        // Released: no further motion
        assert!((x(4) - x(2)).abs() < 1e-9);
    }
}
