//! Horizontal bar chart drawn with block characters, for the terminal.

use std::io;

use colored::Colorize;

use crate::formats::{scale, ChartRenderer};

const BAR: char = '█';

pub struct TextChart {
    width: usize,
    color: bool,
}

impl TextChart {
    /// `width` is the length of the longest bar in columns.
    pub fn new(width: usize, color: bool) -> TextChart {
        TextChart { width, color }
    }
}

impl ChartRenderer for TextChart {
    fn render(&self, out: &mut dyn io::Write, title: &str, entries: &[(&str, u64)]) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", title.bold())?;
        } else {
            writeln!(out, "{}", title)?;
        }

        let label_width = entries.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);
        let max = entries.iter().map(|&(_, c)| c).max().unwrap_or(0);

        for &(word, count) in entries {
            let bar: String = std::iter::repeat(BAR).take(scale(count, max, self.width)).collect();
            let bar = if self.color { bar.cyan().to_string() } else { bar };
            writeln!(out, "{:>lw$} | {} {}", word, bar, count, lw = label_width)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entries: &[(&str, u64)]) -> String {
        let mut buf = Vec::new();
        TextChart::new(10, false).render(&mut buf, "Top words", entries).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_rows() {
        let out = render(&[("pride", 10), ("of", 5)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Top words");
        assert_eq!(lines[1], "pride | ██████████ 10");
        assert_eq!(lines[2], "   of | █████ 5");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "Top words\n");
    }
}
