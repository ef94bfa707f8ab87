#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Width in glyphs of the bar for the largest count.
    pub max_bar_width: usize,
    pub bar_glyph: char,
    pub title: Option<String>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            max_bar_width: 40,
            bar_glyph: '\u{2588}',
            title: None,
        }
    }
}

/// Render (token, count) pairs as a horizontal bar chart.
///
/// Rows keep the order of `entries`; tokens are the category labels, padded to
/// a common width, and bars are scaled so the largest count fills
/// `max_bar_width` glyphs. Every nonzero count renders at least one glyph.
pub fn render_bar_chart(entries: &[(String, u64)], style: &ChartStyle) -> String {
    let mut out = String::new();
    if let Some(title) = &style.title {
        out.push_str(title);
        out.push('\n');
    }
    if entries.is_empty() {
        out.push_str("(no tokens)\n");
        return out;
    }

    let label_width = entries
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);
    let max_count = entries
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0)
        .max(1);

    for (token, count) in entries {
        let width = (count * style.max_bar_width as u64) / max_count;
        let width = if *count > 0 { width.max(1) } else { 0 } as usize;
        let bar: String = std::iter::repeat(style.bar_glyph).take(width).collect();
        out.push_str(&format!("{token:<label_width$}  {bar} {count}\n"));
    }
    out
}
