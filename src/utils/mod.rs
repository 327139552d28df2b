pub mod config;
pub mod fd_limit;
pub mod logger;
pub mod settings_toml;

pub use config::*;
pub use fd_limit::{check_workers_against_fd_limit, max_open_fds, max_workers_by_fd_limit};
pub use logger::{Colors, setup_logging};
pub use settings_toml::{
    SettingsToml, apply_file_to_settings, load_settings_toml, parse_settings_toml,
};
