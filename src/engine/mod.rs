//! Engine module: streaming digests plus the CLI collaborators around the pipeline

pub mod arg_parser;
pub mod cli;
pub mod hashing;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{gather_paths, handle_run};
pub use hashing::{ByteSource, hash_bytes, hash_file, hash_source};
pub use tools::{
    file_basename, format_size, parse_file_list, read_file_list, render_result, render_summary,
    retain_existing,
};
