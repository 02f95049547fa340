pub mod output;

pub use output::{print_error, print_reply, print_safety_alert, render_rich};
