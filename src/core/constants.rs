pub const APP_TITLE: &str = "CONSOLE HISTORY";
pub const DEFAULT_POLL_RATE: u64 = 16;
pub const MIN_POLL_RATE: u64 = 16;
pub const MAX_POLL_RATE: u64 = 1000;
pub const DEFAULT_MAX_MESSAGES: usize = 100;
pub const DEFAULT_INPUT_MAX_LENGTH: usize = 1024;
pub const DEFAULT_TAIL_COUNT: usize = 10;
pub const DOUBLE_ESC_THRESHOLD: u64 = 250;
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
