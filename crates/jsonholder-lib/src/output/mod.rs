use crossterm::style::{Color, Stylize};

/// Print a success message in green to stderr, keeping stdout for JSON.
pub fn success(msg: &str) {
    eprintln!("{}", msg.with(Color::Green));
}

/// Print an error message in red to stderr.
pub fn error(msg: &str) {
    eprintln!("{}", msg.with(Color::Red));
}

/// Print a hint in cyan to stderr.
pub fn info(msg: &str) {
    eprintln!("{}", msg.with(Color::Cyan));
}

/// Write a JSON document (or plain scalar text) to stdout, uncolored.
pub fn document(text: &str) {
    println!("{}", text);
}
