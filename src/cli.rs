use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::menu::DEFAULT_MENU_BREAKPOINT_PX;
use crate::nav::DEFAULT_HEADER_OFFSET_PX;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Theme {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Site root the feed paths resolve against (e.g. `https://example.dev`).
    #[arg(long)]
    pub base_url: Url,

    /// Blog feed path, relative to the base URL.
    #[arg(long, default_value = "assets/linkedin-posts.json")]
    pub posts_path: String,

    /// Projects feed path, relative to the base URL.
    #[arg(long, default_value = "assets/projects.json")]
    pub projects_path: String,

    /// Output HTML file.
    #[arg(long, default_value = "index.html")]
    pub out: PathBuf,

    /// Theme persistence file.
    ///
    /// Defaults to `portfolio-render/theme.json` under the user config directory.
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Force this theme for the run (persisted for the next one).
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Flip the persisted theme before rendering.
    #[arg(long)]
    pub toggle_theme: bool,

    /// Navigation entry to activate instead of the first declared one.
    #[arg(long)]
    pub active_section: Option<String>,

    /// Page title, also used as the nav brand.
    #[arg(long, default_value = "Portfolio")]
    pub site_title: String,

    /// Fixed-header scroll offset in pixels.
    #[arg(long, default_value_t = DEFAULT_HEADER_OFFSET_PX)]
    pub header_offset: u32,

    /// Viewport width in pixels above which the collapsed menu closes.
    #[arg(long, default_value_t = DEFAULT_MENU_BREAKPOINT_PX)]
    pub menu_breakpoint: u32,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Max concurrent feed downloads.
    #[arg(long, default_value_t = 2)]
    pub max_concurrency: usize,

    /// HTTP User-Agent used for feed requests.
    #[arg(long, default_value = "portfolio-render/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
