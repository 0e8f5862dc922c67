// src/core/html.rs
// Case-insensitive slicing helpers for the results site's ASP.NET markup.
// Not a parser: they find tag blocks by text search, which is enough for the
// flat grid tables the site emits.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// True when `lc[at..]` starts a tag named exactly as `open` (e.g. `<a` must not
/// match `<abbr`).
fn is_tag_boundary(lc: &str, at: usize, open: &str) -> bool {
    match lc[at + open.len()..].chars().next() {
        Some(c) => c.is_ascii_whitespace() || c == '>' || c == '/',
        None => false,
    }
}

fn find_open_ci(lc: &str, open_lc: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(open_lc)? + pos;
        // Patterns that already carry attributes (`<div id=...`) need no boundary check.
        if open_lc.contains(' ') || is_tag_boundary(lc, start, open_lc) {
            return Some(start);
        }
        pos = start + 1;
    }
}

/// HTML *inside* the first `open_pat … close_pat` pair.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let o = find_open_ci(&lc, &to_lower(open_pat), 0)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&to_lower(close_pat))?;
    Some(&s[after..after + cr])
}

/// `(start, end)` of the next complete `<tag …>…</tag>` block at or after `from`.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let start = find_open_ci(&lc, &to_lower(open), from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&to_lower(close))?;
    let end = open_end + end_rel + close.len();
    Some((start, end))
}

/// Every `<tag …>…</tag>` block inside `s`, in document order.
pub fn tag_blocks<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_tag_block_ci(s, open, close, pos) {
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

/// `(tag_start, open_end)` of the tag opener carrying `id="…"` (any quoting).
fn opener_with_id(s: &str, lc: &str, id: &str) -> Option<(usize, usize)> {
    let id_lc = to_lower(id);
    let candidates = [
        format!(r#"id="{id_lc}""#),
        format!("id='{id_lc}'"),
        format!("id={id_lc}"),
    ];
    let hit = candidates.iter().filter_map(|pat| lc.find(pat.as_str())).min()?;
    // Must sit inside a tag opener.
    let lt = lc[..hit].rfind('<')?;
    if lc[lt..hit].contains('>') {
        return None;
    }
    Some((lt, s[hit..].find('>')? + hit + 1))
}

/// Byte offset just past the opening tag carrying `id="…"`.
pub fn after_element_with_id(s: &str, id: &str) -> Option<usize> {
    opener_with_id(s, &to_lower(s), id).map(|(_, open_end)| open_end)
}

/// Whole element carrying `id`, up to its own closing tag. Nested elements with
/// the same tag name (a pager table inside a grid) are skipped over.
pub fn block_with_id<'a>(s: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let (start, open_end) = opener_with_id(s, &lc, id)?;
    let name: String = lc[start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return None;
    }
    let open = join!("<", &name);
    let close = join!("</", &name, ">");

    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_close = lc[pos..].find(&close)? + pos;
        match find_open_ci(&lc, &open, pos) {
            Some(o) if o < next_close => {
                depth += 1;
                pos = o + open.len();
            }
            _ => {
                depth -= 1;
                pos = next_close + close.len();
                if depth == 0 {
                    return Some(&s[start..pos]);
                }
            }
        }
    }
}

/// First `<table>` block at or after the element with the given id.
pub fn table_after_id<'a>(s: &'a str, id: &str) -> Option<&'a str> {
    let from = after_element_with_id(s, id)?;
    let (t_s, t_e) = next_tag_block_ci(s, "<table", "</table>", from)?;
    Some(&s[t_s..t_e])
}

/// Inner text of `<td ...>INNER</td>` (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of `attr` on the first tag opener in `block`. Quotes optional.
pub fn attr_value(block: &str, attr: &str) -> Option<String> {
    let opener = &block[..block.find('>')?];
    let lc = to_lower(opener);
    let needle = join!(&to_lower(attr), "=");

    let mut from = 0usize;
    let at = loop {
        let i = lc.get(from..)?.find(&needle)? + from;
        // Whole attribute name only (`href=` but not `data-href=`).
        if i == 0 || lc[..i].ends_with(|c: char| c.is_ascii_whitespace()) {
            break i;
        }
        from = i + 1;
    };

    let val = &opener[at + needle.len()..];
    let (quote, off) = match val.as_bytes().first() {
        Some(b'"') => (Some('"'), 1),
        Some(b'\'') => (Some('\''), 1),
        _ => (None, 0),
    };
    let end = match quote {
        Some(q) => val[off..].find(q).map(|e| off + e).unwrap_or(val.len()),
        None => val.find(|c: char| c.is_ascii_whitespace()).unwrap_or(val.len()),
    };
    Some(val[off..end].to_string())
}

/// Drop `<...>` tags, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of a cell block: inner HTML, entities decoded, tags stripped.
pub fn cell_text(block: &str) -> String {
    strip_tags(super::sanitize::normalize_entities(&inner_after_open_tag(block)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_blocks_respect_name_boundary() {
        let doc = "<abbr>x</abbr><a href='1'>One</a><A HREF=2>Two</A>";
        let anchors = tag_blocks(doc, "<a", "</a>");
        assert_eq!(anchors.len(), 2);
        assert_eq!(cell_text(anchors[0]), "One");
        assert_eq!(cell_text(anchors[1]), "Two");
    }

    #[test]
    fn finds_table_after_id() {
        let doc = r#"<div id="other"><table><tr><td>no</td></tr></table></div>
            <DIV ID="grid"><table class=x><tr><td>yes</td></tr></table></DIV>"#;
        let table = table_after_id(doc, "grid").unwrap();
        assert!(table.contains("yes"));
        assert!(!table.contains("no"));
        assert!(table_after_id(doc, "missing").is_none());
    }

    #[test]
    fn id_on_table_itself() {
        let doc = "<p>x</p><table id='g' border=0><tr><td>cell</td></tr></table><table><tr><td>after</td></tr></table>";
        let table = block_with_id(doc, "g").unwrap();
        assert!(table.starts_with("<table id='g'"));
        assert!(table.contains("cell"));
        assert!(!table.contains("after"));

        let from = after_element_with_id(doc, "g").unwrap();
        assert!(doc[from..].starts_with("<tr>"));
    }

    #[test]
    fn id_block_spans_nested_tables() {
        let doc = r#"<table id="g"><tr><td><table class="pager"><tr><td>1</td></tr></table></td></tr>
            <tr><td>row</td></tr></table><table><tr><td>after</td></tr></table>"#;
        let table = block_with_id(doc, "g").unwrap();
        assert!(table.contains("pager"));
        assert!(table.contains("row"));
        assert!(table.ends_with("</table>"));
        assert!(!table.contains("after"));

        // Unclosed element: no block.
        assert!(block_with_id("<table id=g><tr><td>x</td></tr>", "g").is_none());
    }

    #[test]
    fn attr_value_quoting() {
        assert_eq!(attr_value(r#"<a class="n" href="R.aspx?a=1&amp;b=2">"#, "href").as_deref(), Some("R.aspx?a=1&amp;b=2"));
        assert_eq!(attr_value("<a href='x y'>", "href").as_deref(), Some("x y"));
        assert_eq!(attr_value("<a href=plain id=3>", "href").as_deref(), Some("plain"));
        assert_eq!(attr_value(r#"<a data-href="no">"#, "href"), None);
    }

    #[test]
    fn cell_text_cleans_markup() {
        assert_eq!(cell_text("<td> <span>Pitstop&nbsp;1</span>\n</td>"), "Pitstop 1");
    }
}
