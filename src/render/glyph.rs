use crossterm::style::{Color, Stylize};

use std::fmt;

/// One drawn position of a rendered maze.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    #[default]
    Wall,
    /// A cell interior or an opening between two cells.
    Open,
    /// Part of the overlaid route.
    Route,
    Start,
    Goal,
}

impl Glyph {
    /// The width of each glyph when printed to a terminal, in character widths.
    pub const GLYPH_WIDTH: u16 = 2;

    /// Single ASCII character used for plain text output.
    pub fn symbol(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Open => ' ',
            Glyph::Route => '*',
            Glyph::Start => 'S',
            Glyph::Goal => 'G',
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Open => "  ".with(Color::Reset),
            Glyph::Route => "🟨".with(Color::Yellow),
            Glyph::Start => "🟩".with(Color::Green),
            Glyph::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::GLYPH_WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_render_at_fixed_width() {
        for glyph in [
            Glyph::Wall,
            Glyph::Open,
            Glyph::Route,
            Glyph::Start,
            Glyph::Goal,
        ] {
            // Display asserts the width in debug builds
            assert!(!glyph.to_string().is_empty());
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols = [
            Glyph::Wall,
            Glyph::Open,
            Glyph::Route,
            Glyph::Start,
            Glyph::Goal,
        ]
        .map(Glyph::symbol);
        for (i, a) in symbols.iter().enumerate() {
            assert!(symbols[i + 1..].iter().all(|b| a != b));
        }
    }
}
