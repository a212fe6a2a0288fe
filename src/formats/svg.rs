//! Horizontal bar chart exported as a standalone SVG document.

use std::io;

use html_escape::encode_text;

use crate::formats::{scale, ChartRenderer};

const ROW_HEIGHT: usize = 30;
const BAR_HEIGHT: usize = 22;
const CHAR_WIDTH: usize = 8;
const TOP: usize = 50;
const BOTTOM: usize = 60;
const RIGHT: usize = 40;
const TICKS: u64 = 4;

pub struct SvgChart {
    plot_width: usize,
}

impl SvgChart {
    /// `plot_width` is the length of the longest bar in pixels.
    pub fn new(plot_width: usize) -> SvgChart {
        SvgChart { plot_width }
    }
}

impl Default for SvgChart {
    fn default() -> SvgChart {
        SvgChart::new(600)
    }
}

impl ChartRenderer for SvgChart {
    fn render(&self, out: &mut dyn io::Write, title: &str, entries: &[(&str, u64)]) -> io::Result<()> {
        let label_chars = entries.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);
        let left = 60 + label_chars * CHAR_WIDTH;
        let plot_height = entries.len().max(1) * ROW_HEIGHT;
        let width = left + self.plot_width + RIGHT;
        let height = TOP + plot_height + BOTTOM;
        let axis_y = TOP + plot_height;
        let max = entries.iter().map(|&(_, c)| c).max().unwrap_or(0);

        writeln!(out,
                 r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif" font-size="13">"#,
                 width, height, width, height)?;
        writeln!(out, r#"<rect width="{}" height="{}" fill="white"/>"#, width, height)?;
        writeln!(out,
                 r#"<text x="{}" y="30" text-anchor="middle" font-size="16">{}</text>"#,
                 left + self.plot_width / 2,
                 encode_text(title))?;

        for (row, &(word, count)) in entries.iter().enumerate() {
            let y = TOP + row * ROW_HEIGHT + (ROW_HEIGHT - BAR_HEIGHT) / 2;
            let len = scale(count, max, self.plot_width);
            writeln!(out,
                     r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}" fill="skyblue"/>"#,
                     left, y, len, BAR_HEIGHT)?;
            writeln!(out,
                     r#"<text x="{}" y="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                     left - 6,
                     y + BAR_HEIGHT / 2,
                     encode_text(word))?;
        }

        writeln!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                 left, TOP, left, axis_y)?;
        writeln!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                 left, axis_y, left + self.plot_width, axis_y)?;

        if max > 0 {
            for t in 0..=TICKS {
                let value = max * t / TICKS;
                let x = left + scale(value, max, self.plot_width);
                writeln!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                         x, axis_y, x, axis_y + 5)?;
                writeln!(out, r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                         x, axis_y + 20, value)?;
            }
        }

        writeln!(out, r#"<text x="{}" y="{}" text-anchor="middle">Frequency</text>"#,
                 left + self.plot_width / 2, height - 12)?;
        writeln!(out,
                 r#"<text x="16" y="{}" text-anchor="middle" transform="rotate(-90 16 {})">Words</text>"#,
                 TOP + plot_height / 2, TOP + plot_height / 2)?;
        writeln!(out, "</svg>")?;
        out.flush()
    }
}
