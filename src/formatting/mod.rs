pub mod bugs;
pub mod utils;

pub use bugs::{format_status_color, print_bugs, print_single_bug};
pub use utils::{format_priority, format_relative_time, truncate};
