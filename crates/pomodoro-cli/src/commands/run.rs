use std::io::Write;

use clap::Args;
use pomodoro_core::error::Result as CoreResult;
use pomodoro_core::{Config, Event, IntervalDurations, TimerEngine, TimerRunner, TimerView};
use tracing::info;

use crate::notify::Notifier;
use crate::tui;

/// Per-run overrides for the configured interval lengths.
#[derive(Args, Debug, Default)]
pub struct DurationArgs {
    /// Work interval length (e.g. "25", "25m", "90s", "1h"; bare numbers are minutes)
    #[arg(long = "work", value_name = "DURATION", value_parser = parse_interval)]
    pub work_secs: Option<u64>,
    /// Break interval length (same format as --work)
    #[arg(long = "break", value_name = "DURATION", value_parser = parse_interval)]
    pub break_secs: Option<u64>,
}

impl DurationArgs {
    /// Config durations with any command-line overrides applied.
    pub fn resolve(&self, config: &Config) -> CoreResult<IntervalDurations> {
        let base = config.durations()?;
        let durations = IntervalDurations::new(
            self.work_secs.unwrap_or(base.work_secs()),
            self.break_secs.unwrap_or(base.break_secs()),
        )?;
        Ok(durations)
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub durations: DurationArgs,
    /// Print one status line per second instead of drawing the terminal UI
    #[arg(long)]
    pub headless: bool,
    /// Completed intervals before exiting (headless only)
    #[arg(long, default_value_t = 1, requires = "headless")]
    pub intervals: u32,
    /// Disable desktop notifications for this run
    #[arg(long)]
    pub no_notify: bool,
}

/// Parse an interval length into seconds.
pub fn parse_interval(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let (digits, multiplier) = match s.char_indices().last() {
        Some((i, 's')) => (&s[..i], 1),
        Some((i, 'm')) => (&s[..i], 60),
        Some((i, 'h')) => (&s[..i], 3600),
        _ => (s, 60),
    };
    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{s}'"))?;
    if value == 0 {
        return Err("duration must be greater than zero".into());
    }
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("duration '{s}' is too large"))
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let durations = args.durations.resolve(&config)?;
    let notifier = Notifier::new(config.notifications.enabled && !args.no_notify);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    info!(
        work_secs = durations.work_secs(),
        break_secs = durations.break_secs(),
        headless = args.headless,
        "starting timer"
    );

    if args.headless {
        runtime.block_on(run_headless(
            durations,
            args.intervals.max(1),
            notifier,
            config.notifications.bell,
        ))
    } else {
        let _guard = runtime.enter();
        tui::run(TimerEngine::new(durations), notifier)?;
        Ok(())
    }
}

/// Count down without a UI, starting each interval automatically.
async fn run_headless(
    durations: IntervalDurations,
    intervals: u32,
    notifier: Notifier,
    bell: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (runner, mut events) = TimerRunner::new(TimerEngine::new(durations));
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", runner.with_engine(TimerView::from_engine).status_line())?;
    runner.start();

    let mut completed = 0;
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                match event {
                    Event::StateSnapshot { .. } => {
                        writeln!(stdout, "{}", runner.with_engine(TimerView::from_engine).status_line())?;
                    }
                    Event::IntervalCompleted { notice, .. } => {
                        if bell {
                            write!(stdout, "\x07")?;
                        }
                        writeln!(stdout, "{}: {}", notice.title, notice.message)?;
                        notifier.notify(&notice);
                        completed += 1;
                        if completed >= intervals {
                            break;
                        }
                        runner.start();
                    }
                    _ => {}
                }
                stdout.flush()?;
            }
            _ = tokio::signal::ctrl_c() => {
                runner.pause();
                info!("interrupted");
                break;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
