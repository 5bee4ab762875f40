//! Error log output

use crate::error::WalkError;

/// One backtick-wrapped message per line, in the order the errors occurred.
pub fn render_error_log(errors: &[WalkError]) -> String {
    let mut output = String::new();
    for err in errors {
        output.push('`');
        output.push_str(&err.to_string());
        output.push_str("`\n");
    }
    output
}
