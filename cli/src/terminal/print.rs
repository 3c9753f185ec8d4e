use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Log target reserved for plain terminal output.
pub const TARGET: &str = "prim::print";
pub const RAW_FIELD: &str = "raw_msg";

pub fn print(msg: &str) {
    info!(target: "prim::print", raw_msg = msg);
}

pub fn banner(quiet: u8) {
    if quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ PRIM v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// Prints `key....: value` lines with the colons lined up.
pub fn aligned_lines<V: Display>(pairs: &[(&str, V)]) {
    let key_width: usize = pairs.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    for (key, value) in pairs {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.width()));
        let output: String = format!(
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value.to_string().color(colors::TEXT_DEFAULT)
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}
