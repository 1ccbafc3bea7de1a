mod builtin;
mod check;
mod cli;
mod feed;
mod fetcher;
mod html;
mod loader;
mod menu;
mod nav;
mod page;
mod progress;
mod theme;

use anyhow::Context as _;
use chrono::Datelike as _;

use cli::Args;
use feed::{BlogPost, Project};
use fetcher::Fetcher;
use page::Page;
use theme::{FileThemeStore, ThemeController};

pub use cli::ProgressMode;
pub use cli::{Args as CliArgs, ThemeArg};

pub async fn run(args: Args) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled, args.max_concurrency);

    progress.set_stage("读取主题偏好");
    let state_file = args
        .state_file
        .clone()
        .unwrap_or_else(FileThemeStore::default_path);
    let mut theme = ThemeController::initialize(FileThemeStore::new(state_file));
    if args.toggle_theme {
        theme.toggle();
    }
    if let Some(forced) = args.theme {
        theme.set(forced.into());
    }

    let fetcher = Fetcher::new(
        &args.user_agent,
        args.max_concurrency,
        std::time::Duration::from_secs(args.timeout_secs),
        Some(progress.clone()),
    )?;

    progress.set_stage("抓取博客与项目数据");
    let posts_url = args
        .base_url
        .join(&args.posts_path)
        .with_context(|| format!("resolve {}", args.posts_path))?;
    let projects_url = args
        .base_url
        .join(&args.projects_path)
        .with_context(|| format!("resolve {}", args.projects_path))?;

    let (blog, projects) = tokio::join!(
        loader::load_list::<BlogPost>(
            &fetcher,
            posts_url,
            html::render_blog_post,
            loader::BLOG_FALLBACK,
        ),
        loader::load_list::<Project>(
            &fetcher,
            projects_url,
            html::render_project,
            loader::PROJECTS_FALLBACK,
        ),
    );

    progress.set_stage("初始化页面状态");
    let (entries, sections) = page::default_nav();
    let router = nav::SectionRouter::new(entries, sections, args.header_offset)?;
    let mut page = Page {
        theme,
        router,
        menu: menu::ResponsiveMenu::new(args.menu_breakpoint),
        blog,
        projects,
    };
    page.startup(args.active_section.as_deref())?;

    progress.set_stage("渲染页面");
    let year = chrono::Local::now().year();
    let html = html::render_page(&page, &args.site_title, year);
    check::assert_page_invariants(&html)?;

    progress.set_stage("写入输出");
    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(&args.out, html).with_context(|| format!("write {}", args.out.display()))?;

    progress.finish();
    Ok(())
}
