mod config;
mod error;
mod models;
mod ui;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{default_config_path, load_config};
use crate::ui::{App, render};

#[derive(Parser, Debug)]
#[command(name = "tracalorie")]
#[command(version)]
#[command(about = "Terminal calorie tracker", long_about = None)]
struct Args {
    /// Config file with log level and seed items
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (the terminal is taken over by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 默认日志文件路径 (~/.cache/tracalorie/tracalorie.log)
fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .context("无法获取用户缓存目录")?
        .join("tracalorie");
    Ok(dir.join("tracalorie.log"))
}

/// 初始化日志：RUST_LOG 优先，其次配置文件中的级别，默认 info
fn init_logging(path: &Path, level: Option<&str>) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("无法创建日志目录 {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("无法创建日志文件 {}", path.display()))?;

    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("无法初始化日志")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config = match args.config.or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => Default::default(),
    };

    let log_path = match args.log_file {
        Some(path) => path,
        None => default_log_path()?,
    };
    init_logging(&log_path, config.log_level.as_deref())?;

    // 创建应用状态
    let mut app = App::new(config.build_store());
    log::info!("Starting with {} items", app.store.len());

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    log::info!(
        "Exiting with {} items, {} calories",
        app.store.len(),
        app.store.cached_total()
    );

    result.context("界面运行出错")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()?
            && key.kind == crossterm::event::KeyEventKind::Press
            && ui::handle_key_event(app, key)?
        {
            break;
        }
    }
    Ok(())
}
