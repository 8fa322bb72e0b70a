pub mod report;

pub use report::{print_error, print_header, print_inputs, print_line_check, print_next_steps, print_result};
