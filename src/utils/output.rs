use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }
}
