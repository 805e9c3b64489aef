use owo_colors::OwoColorize;

use crate::output::is_quiet;
use crate::ui::{palette, Icons};

pub fn success(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(palette().stored));
}

/// A lookup or removal that found nothing
pub fn not_found(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::MAG, label.style(palette().absent));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(palette().failure));
}

pub fn info(icon: &str, label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!(
        "{} {}: {}",
        icon.style(palette().icon),
        label.style(palette().label),
        value
    );
}

pub fn dim(text: &str) -> String {
    text.style(palette().label).to_string()
}
