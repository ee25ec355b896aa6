//! Subject line and HTML body of the alert email.

use std::fmt::Write as _;

use crate::matcher::{MatchResult, parse_published_at};

/// Subject line carrying the match count.
pub fn render_subject(match_count: usize) -> String {
    format!("🚨 IDX Alert: {match_count} Potensi Multibagger Baru")
}

/// Renders one table row per match: local time of day, code, title.
pub fn render_html(matches: &[MatchResult], window_minutes: i64) -> String {
    let mut html = String::new();
    html.push_str("<html><body>\n");
    let _ = writeln!(
        html,
        "<h2>Update Saham Potensial (Last {window_minutes} Mins)</h2>"
    );
    html.push_str(
        "<table border=\"1\" cellpadding=\"5\" style=\"border-collapse: collapse; width: 100%;\">\n",
    );
    html.push_str(
        "<tr style=\"background-color: #f2f2f2;\"><th>Waktu</th><th>Kode</th><th>Judul</th></tr>\n",
    );

    for m in matches {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td><b>{}</b></td><td>{}</td></tr>",
            escape_html(&time_of_day(&m.published_at)),
            escape_html(m.code.as_deref().unwrap_or("-")),
            escape_html(&m.title),
        );
    }

    html.push_str("</table></body></html>");
    html
}

/// `HH:MM` of a feed timestamp; the raw string when it does not parse.
fn time_of_day(published_at: &str) -> String {
    parse_published_at(published_at)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| published_at.to_string())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
