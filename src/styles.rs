//! Styling for report titles and counts. Styled text always carries its ANSI
//! codes; the `anstream` stream it's written to strips them when color is
//! off.
use anstyle::{AnsiColor, Color, Style};
use clap::ValueEnum;
use std::fmt;

/// When to color the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal that supports it
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

const GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const BOLD_YELLOW: Style = YELLOW.bold();

#[must_use]
pub(crate) fn as_count(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: GREEN, content }
}
#[must_use]
pub(crate) fn as_title(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BOLD_YELLOW, content }
}

pub(crate) struct StyledStr<'a> {
    prefix: Style,
    content: &'a str,
}
impl StyledStr<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}
impl fmt::Display for StyledStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix.render(), self.content, self.prefix.render_reset())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_len() {
        let contents = "abc";
        assert_eq!(as_count(contents).len(), contents.len());
        assert_eq!(as_title(contents).len(), contents.len());
    }

    #[test]
    fn stripping_styles_leaves_the_content() {
        let styled = as_title("Union").to_string();
        assert_ne!(styled, "Union");
        assert_eq!(anstream::adapter::strip_str(&styled).to_string(), "Union");
    }
}
