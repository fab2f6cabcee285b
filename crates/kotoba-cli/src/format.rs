use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a column `width` terminal cells wide. Kana and kanji
/// count as two cells.
pub fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{s}{}", " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// Widest cell of `cells`, in terminal columns.
pub fn column_width<'a>(cells: impl IntoIterator<Item = &'a str>) -> usize {
    cells
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_wide_chars() {
        assert_eq!(pad("ほん", 6), "ほん  ");
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("いっぽん", 4), "いっぽん");
    }

    #[test]
    fn widest_cell() {
        assert_eq!(column_width(["a", "ドル", "じかん"]), 6);
        assert_eq!(column_width(Vec::<&str>::new()), 0);
    }
}
