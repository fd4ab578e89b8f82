use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal. Anything but `y`/`yes` is a no,
/// including EOF and read errors.
pub fn confirm(message: &str) -> bool {
    let stdin = io::stdin();
    confirm_with(message, &mut stdin.lock(), &mut io::stderr())
}

fn confirm_with(message: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if write!(output, "{message} [y/N] ").and_then(|_| output.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}
