//! Output formats for the bar chart of the most frequent words.
//!
//! A type implementing ChartRenderer is used at the end of a run to draw the
//! ranked (word, count) entries. Existing options are a plain terminal chart
//! (TextChart) and an exported SVG document (SvgChart).

use std::io;

pub mod svg;
pub mod text;

pub use self::svg::SvgChart;
pub use self::text::TextChart;

pub trait ChartRenderer {
    /// Draws a horizontal bar chart of `entries` to `out`. `entries` comes ranked highest
    /// first and is drawn with the first entry at the top. An empty slice draws an empty chart.
    fn render(&self, out: &mut dyn io::Write, title: &str, entries: &[(&str, u64)]) -> io::Result<()>;
}

/// Length of a bar for `count` when `max` gets `full` units. Non-zero counts always get at
/// least one unit.
pub fn scale(count: u64, max: u64, full: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    let len = (count as f64 / max as f64 * full as f64).round() as usize;
    len.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(scale(10, 10, 40), 40);
        assert_eq!(scale(5, 10, 40), 20);
        assert_eq!(scale(1, 1000, 40), 1);
        assert_eq!(scale(0, 10, 40), 0);
        assert_eq!(scale(0, 0, 40), 0);
    }
}
