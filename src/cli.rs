use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "Pomodoro timer for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log at debug level (see `pomodoro paths` for the log file)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the timer (the default when no command is given)
    Start(StartArgs),

    /// Play the end-of-phase sound once
    Chime,

    /// Show where config and log files are stored
    Paths,
}

#[derive(Args, Default)]
pub struct StartArgs {
    /// Focus length in minutes (5-60, steps of 5)
    #[arg(long)]
    pub focus: Option<u32>,

    /// Break length in minutes (1-15)
    #[arg(long = "break")]
    pub break_minutes: Option<u32>,

    /// Don't play a sound when a phase ends
    #[arg(long)]
    pub mute: bool,
}
