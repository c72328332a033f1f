use crate::catalog::Badge;

use super::util::extract_link;

// NOTE: this only understands the pipe tables of the markdown-badges README:
// `| Name | Badge | Markdown |` with the badge image in the second column.
// Anything fancier (escaped pipes, inline code containing `|`) is split naively.

pub const CELL_DELIM: char = '|';

/// Leading + trailing empty cells around at least two real columns.
pub const MIN_CELLS: usize = 4;

const HEADER_FIRST_CELL: &str = "Name";

/// What a single line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Does not start with `|`.
    NotARow,
    /// Column header row or `| --- |` separator row.
    Header,
    /// Table row with too few cells to hold a badge.
    Short { cells: usize },
    Badge(Badge),
}

pub fn classify_row(line: &str) -> Row {
    if !line.starts_with(CELL_DELIM) {
        return Row::NotARow;
    }

    let cells: Vec<&str> = line.split(CELL_DELIM).map(str::trim).collect();

    if is_separator(&cells) || cells.get(1) == Some(&HEADER_FIRST_CELL) {
        return Row::Header;
    }

    if cells.len() < MIN_CELLS {
        return Row::Short { cells: cells.len() };
    }

    Row::Badge(Badge::new(cells[1], extract_link(cells[2])))
}

/// `| --- | :---: |` style alignment rows.
fn is_separator(cells: &[&str]) -> bool {
    let mut non_empty = cells.iter().filter(|c| !c.is_empty()).peekable();
    non_empty.peek().is_some()
        && non_empty.all(|c| c.contains('-') && c.chars().all(|ch| ch == '-' || ch == ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_row_uses_name_and_second_cell_link() {
        let row = classify_row("| Foo | [img](http://x/badge.svg?style=plastic) | http://y | ex |");
        assert_eq!(
            row,
            Row::Badge(Badge::new("Foo", Some("http://x/badge.svg?style=plastic")))
        );
    }

    #[test]
    fn header_and_separator_rows_are_recognized() {
        assert_eq!(classify_row("| Name | Badge | Markdown |"), Row::Header);
        assert_eq!(classify_row("| --- | --- | --- |"), Row::Header);
        assert_eq!(classify_row("|:---:|---|--:|"), Row::Header);
    }

    #[test]
    fn names_that_merely_start_with_name_are_badges() {
        let row = classify_row("| Namecheap | ![Namecheap](https://n/x.svg) | `md` |");
        assert_eq!(row, Row::Badge(Badge::new("Namecheap", Some("https://n/x.svg"))));
    }

    #[test]
    fn short_rows_report_their_cell_count() {
        assert_eq!(classify_row("| Lonely |"), Row::Short { cells: 3 });
        assert_eq!(classify_row("|"), Row::Short { cells: 2 });
    }

    #[test]
    fn four_cells_are_enough_and_missing_link_is_none() {
        assert_eq!(
            classify_row("| Bare | no image |"),
            Row::Badge(Badge::new("Bare", None::<String>))
        );
    }

    #[test]
    fn non_table_lines_are_not_rows() {
        assert_eq!(classify_row("  | indented |"), Row::NotARow);
        assert_eq!(classify_row("plain"), Row::NotARow);
        assert_eq!(classify_row(""), Row::NotARow);
    }
}
