use pomodoro_core::{Config, TimerEngine, TimerView};

use super::run::DurationArgs;

/// Print the state a fresh timer would start in.
pub fn run(durations: &DurationArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let engine = TimerEngine::new(durations.resolve(&config)?);
    let status = serde_json::json!({
        "snapshot": engine.snapshot(),
        "view": TimerView::from_engine(&engine),
    });
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
