use console_history::core::constants::VERSION;
use console_history::{Config, Result, ScreenManager};
use std::fs::File;
use std::path::PathBuf;

fn main() -> Result<()> {
    init_logging();

    // Make sure a panic never leaves the terminal in raw mode.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        log::error!("Panic: {}", panic_info);
    }));

    let config = Config::load()?;
    log::info!("Starting console-history v{}", VERSION);

    let mut screen = ScreenManager::new(&config)?;
    screen.run()
}

fn init_logging() {
    // The TUI owns stdout, so logs go to a file next to the binary. Running
    // without a usable log location just means running without logs.
    let Some(path) = log_file_path() else { return };
    let Ok(file) = File::create(&path) else { return };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn log_file_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("console-history.log"))
}
