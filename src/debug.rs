use procr_ansi_term::{Color, Style};

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);

pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);
pub const STYLE_ITEM: Style = Style::new().fg(Color::Cyan);
pub const STYLE_PATH: Style = Style::new().underline().fg(COLOR_BLUE);
pub const STYLE_DONE: Style = Style::new().bold().fg(COLOR_GREEN);

#[macro_export]
macro_rules! info_label {
    ($label:literal) => {
        procr_ansi_term::Style::new()
            .bold()
            .fg(procr_ansi_term::Color::Yellow)
            .paint(format!("({})", $label))
    };
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}

/// `label:value` with the label styled, for log lines.
pub fn item(label: &str, value: impl std::fmt::Display) -> String {
    format!(
        "{}:{}",
        STYLE_LABEL.paint(label),
        STYLE_ITEM.paint(value.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_keeps_text() {
        let s = item("count", 3);
        assert!(s.contains("count"));
        assert!(s.contains('3'));
    }
}
