use crate::navigation::NavigationEntry;

const MAX_COL_WIDTH: usize = 60;

// Render rows as an ASCII table with a row-count footer.
// Returns an empty string when there are no rows.
pub fn render_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() { return String::new(); }

    // Compute widths
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count().min(MAX_COL_WIDTH)).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate().take(columns.len()) {
            let w = cell.chars().count();
            if w > widths[i] { widths[i] = w.min(MAX_COL_WIDTH); }
        }
    }

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let sep = build_separator(&widths);
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&build_row(&header, &widths));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for r in rows {
        out.push_str(&build_row(r, &widths));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!("rows: {}", rows.len()));
    out
}

/// One row per entry: group, title, path, icon.
pub fn navigation_rows(group: &str, entries: &[&NavigationEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| vec![group.to_string(), e.title.to_string(), e.path.to_string(), e.icon.to_string()])
        .collect()
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('+');
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let text = truncate(&cell, *w);
        s.push(' ');
        s.push_str(&text);
        s.push_str(&" ".repeat(w.saturating_sub(text.chars().count())));
        s.push(' ');
        s.push('|');
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max { return s.to_string(); }
    if max <= 1 { return s.chars().take(max).collect(); }
    let mut t: String = s.chars().take(max - 1).collect();
    t.push('…');
    t
}
