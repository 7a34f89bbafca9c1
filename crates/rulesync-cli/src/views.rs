//! Console output helpers. All user-facing output goes through these so the
//! handlers stay free of formatting concerns.

use owo_colors::OwoColorize;

pub fn info(message: &str) {
    println!("{}", message);
}

pub fn success(message: &str) {
    println!("✅ {}", message);
}

pub fn warn(message: &str) {
    println!("⚠️  {}", message.yellow());
}

pub fn error(message: &str) {
    eprintln!("❌ {}", message.red());
}

pub fn detail(message: &str) {
    println!("  {}", message.dimmed());
}
