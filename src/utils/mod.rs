pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::resolve_project_dir;
pub use paths::{encode_path, format_path_with_tilde, history_dir, turn_log_dir};
pub use terminal::strip_control_sequences;
pub use timestamps::{TIMESTAMP_FORMAT, format_timestamp};
