use colored::Colorize;
use env_logger::Builder;
use log::Level;
use std::io::Write;

pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // try_init: library tests and repeated CLI runs in one process may call this more than once
    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level) // Our crate: use requested level
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => match pool_thread_tag(name, std::thread::current().name()) {
                    Some(tag) => format!("[{} {}] {}", name.cyan(), tag.dimmed(), record.args()),
                    None => format!("[{}] {}", name.cyan(), record.args()),
                },
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
}

/// Pool threads are named `<pkg>-worker-N` / `<pkg>-supervisor`; return the part after the
/// package prefix so per-file lines show which worker logged them.
fn pool_thread_tag<'a>(pkg: &str, thread: Option<&'a str>) -> Option<&'a str> {
    thread?
        .strip_prefix(pkg)?
        .strip_prefix('-')
        .filter(|tag| !tag.is_empty())
}

/// Terminal colors for per-file result lines.
pub struct Colors;

impl Colors {
    pub const FAILED: &'static str = "red";

    pub fn colorize(color: &str, text: &str) -> String {
        text.color(color).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_tagged() {
        assert_eq!(
            pool_thread_tag("sumpool", Some("sumpool-worker-3")),
            Some("worker-3")
        );
        assert_eq!(
            pool_thread_tag("sumpool", Some("sumpool-supervisor")),
            Some("supervisor")
        );
    }

    #[test]
    fn other_threads_are_not_tagged() {
        assert_eq!(pool_thread_tag("sumpool", Some("main")), None);
        assert_eq!(pool_thread_tag("sumpool", Some("sumpool")), None);
        assert_eq!(pool_thread_tag("sumpool", Some("sumpoolx-1")), None);
        assert_eq!(pool_thread_tag("sumpool", None), None);
    }
}
