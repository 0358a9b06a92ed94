use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "display-modes")]
#[command(about = "List displays and switch their resolution")]
#[command(
    long_about = "Lists the displays attached to the desktop with every mode they support, and switches a display to another mode or back to its stored default."
)]
pub struct Cli {
    /// Log enumeration and mode-change details (overrides RUST_LOG)
    #[clap(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List display devices and their current resolution
    List(ListArgs),
    /// Switch a display to another resolution
    Set(SetArgs),
    /// Restore a display's default resolution
    Restore(RestoreArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print every supported mode, not just the current one
    #[clap(long, short = 'm')]
    pub modes: bool,

    /// Emit JSON instead of text
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Device index as printed by `list`
    #[clap(long, short = 'd')]
    pub device: usize,

    /// Width in pixels (0 keeps the current width)
    #[clap(long, short = 'W', default_value_t = 0)]
    pub width: u32,

    /// Height in pixels (0 keeps the current height)
    #[clap(long, short = 'H', default_value_t = 0)]
    pub height: u32,

    /// Color depth in bits per pixel (0 keeps the current depth)
    #[clap(long, default_value_t = 0)]
    pub bpp: u32,

    /// Refresh rate in Hz (0 keeps the current rate)
    #[clap(long, short = 'r', default_value_t = 0)]
    pub refresh: u32,
}

#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Device index as printed by `list`
    #[clap(long, short = 'd')]
    pub device: usize,
}
