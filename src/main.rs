mod audio;
mod cli;
mod config;
mod logging;
mod paths;
mod timer;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, StartArgs};
use config::{AppConfig, TimerConfig};
use console::style;
use timer::{Durations, TimerWidget};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Without a log file the timer still runs; tracing events are dropped
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} logging disabled: {e:#}", style("warning:").yellow());
    }
    let config = config::load_config()?;

    match cli.command.unwrap_or_else(|| Command::Start(StartArgs::default())) {
        Command::Start(args) => start(&config, &args),

        Command::Chime => {
            println!("Playing {}", style("end-of-phase chime").green());
            audio::playback::play_blocking(&config.sound)?;
            println!("Done.");
            Ok(())
        }

        Command::Paths => {
            println!("  Config:  {}", style(paths::config_file().display()).cyan());
            println!("  Log:     {}", style(paths::log_file().display()).cyan());
            Ok(())
        }
    }
}

fn start(config: &AppConfig, args: &StartArgs) -> Result<()> {
    let durations = startup_durations(&config.timer, args);
    let notifier = audio::notifier_for(&config.sound, args.mute);
    let mut widget = TimerWidget::new(durations);

    info!(
        focus = durations.focus_minutes(),
        break_ = durations.break_minutes(),
        "timer opened"
    );

    tui::with_terminal(|terminal| {
        tui::screens::pomodoro::run(terminal, &mut widget, notifier.as_ref())
    })
}

/// CLI flags win over the config file; both are clamped onto the valid grid.
fn startup_durations(cfg: &TimerConfig, args: &StartArgs) -> Durations {
    let merged = TimerConfig {
        focus_minutes: args.focus.unwrap_or(cfg.focus_minutes),
        break_minutes: args.break_minutes.unwrap_or(cfg.break_minutes),
    };
    Durations::from(&merged)
}
