//! Table decorator for adding borders, headers, and separators.
//!
//! A [`Table`] holds a list of [`Column`]s and a [`BorderStyle`]. Column
//! widths are resolved from the data on every [`Table::render`] call, so the
//! same table can render any number of row sets.
//!
//! # Example
//!
//! ```rust
//! use csvsift_render::tabular::{BorderStyle, Col, Table};
//!
//! let table = Table::new([Col::left("name"), Col::right("price")])
//!     .border(BorderStyle::Ascii);
//!
//! let data = vec![vec!["iphone 14", "999"]];
//! let expected = "\
//! +-----------+-------+
//! | name      | price |
//! +===========+=======+
//! | iphone 14 |   999 |
//! +-----------+-------+";
//! assert_eq!(table.render(&data), expected);
//! ```

use serde::{Deserialize, Serialize};

use super::types::{Align, Column};
use super::util::{block_width, pad_aligned};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders: columns separated by two spaces, dashes under the header.
    None,
    /// ASCII borders: +, -, |, with `=` under the header
    #[default]
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    ///
    /// Returns `None` for [`BorderStyle::None`], which is laid out without
    /// any frame.
    fn chars(&self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
                header_horizontal: '=',
                header_left_t: '+',
                header_cross: '+',
                header_right_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
                header_horizontal: '═',
                header_left_t: '╞',
                header_cross: '╪',
                header_right_t: '╡',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
                header_horizontal: '━',
                header_left_t: '┣',
                header_cross: '╋',
                header_right_t: '┫',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
                header_horizontal: '═',
                header_left_t: '╠',
                header_cross: '╬',
                header_right_t: '╣',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
                header_horizontal: '═',
                header_left_t: '╞',
                header_cross: '╪',
                header_right_t: '╡',
            },
        };
        Some(chars)
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
    header_horizontal: char,
    header_left_t: char,
    header_cross: char,
    header_right_t: char,
}

/// Column gap used by [`BorderStyle::None`].
const PLAIN_GAP: &str = "  ";

/// A decorated table with borders, headers, and separators.
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<Column>,
    border: BorderStyle,
    row_separator: bool,
}

impl Table {
    /// Create a table with the given columns and ASCII borders.
    pub fn new<I: IntoIterator<Item = Column>>(columns: I) -> Self {
        Table {
            columns: columns.into_iter().collect(),
            border: BorderStyle::default(),
            row_separator: false,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Enable row separators between data rows.
    ///
    /// Has no effect with [`BorderStyle::None`].
    pub fn row_separator(mut self, enable: bool) -> Self {
        self.row_separator = enable;
        self
    }

    /// Resolve each column's width: the widest of its header and cells.
    pub fn widths<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|row| block_width(self.cell_text(row, i)))
                    .chain(std::iter::once(block_width(&column.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the complete table with all rows.
    ///
    /// The header is always present, so an empty row set still renders a
    /// frame with the column titles. Cells past the last column are ignored;
    /// missing cells render as the column's null representation.
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let widths = self.widths(rows);
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        let header_aligns: Vec<Align> = self.columns.iter().map(|c| c.header_align).collect();
        let data_aligns: Vec<Align> = self.columns.iter().map(|c| c.align).collect();

        let Some(chars) = self.border.chars() else {
            return self.render_plain(rows, &widths, &header, &header_aligns, &data_aligns);
        };

        let mut output = Vec::new();
        output.push(horizontal_line(
            &widths,
            chars.horizontal,
            chars.top_left,
            chars.top_t,
            chars.top_right,
        ));
        output.extend(framed_lines(&header, &widths, &header_aligns, chars.vertical));
        output.push(horizontal_line(
            &widths,
            chars.header_horizontal,
            chars.header_left_t,
            chars.header_cross,
            chars.header_right_t,
        ));

        let separator = self.row_separator.then(|| {
            horizontal_line(
                &widths,
                chars.horizontal,
                chars.left_t,
                chars.cross,
                chars.right_t,
            )
        });

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                if let Some(ref sep) = separator {
                    output.push(sep.clone());
                }
            }
            let cells = self.cells(row);
            output.extend(framed_lines(&cells, &widths, &data_aligns, chars.vertical));
        }

        output.push(horizontal_line(
            &widths,
            chars.horizontal,
            chars.bottom_left,
            chars.bottom_t,
            chars.bottom_right,
        ));

        output.join("\n")
    }

    fn render_plain<S: AsRef<str>>(
        &self,
        rows: &[Vec<S>],
        widths: &[usize],
        header: &[&str],
        header_aligns: &[Align],
        data_aligns: &[Align],
    ) -> String {
        let mut output = plain_lines(header, widths, header_aligns);
        output.push(
            widths
                .iter()
                .map(|&w| "-".repeat(w))
                .collect::<Vec<_>>()
                .join(PLAIN_GAP),
        );
        for row in rows {
            output.extend(plain_lines(&self.cells(row), widths, data_aligns));
        }
        output.join("\n")
    }

    fn cells<'a, S: AsRef<str>>(&'a self, row: &'a [S]) -> Vec<&'a str> {
        (0..self.columns.len())
            .map(|i| self.cell_text(row, i))
            .collect()
    }

    fn cell_text<'a, S: AsRef<str>>(&'a self, row: &'a [S], index: usize) -> &'a str {
        match row.get(index).map(AsRef::as_ref) {
            Some(text) if !text.is_empty() => text,
            _ => &self.columns[index].null_repr,
        }
    }
}

/// Splits cells into physical lines, padding short cells with blanks so
/// every cell in the row has the same height.
fn cell_lines<'a>(cells: &[&'a str]) -> Vec<Vec<&'a str>> {
    let split: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);
    (0..height)
        .map(|line| {
            split
                .iter()
                .map(|parts| parts.get(line).copied().unwrap_or(""))
                .collect()
        })
        .collect()
}

fn framed_lines(cells: &[&str], widths: &[usize], aligns: &[Align], vertical: char) -> Vec<String> {
    let joint = format!(" {} ", vertical);
    cell_lines(cells)
        .into_iter()
        .map(|parts| {
            let body = padded(&parts, widths, aligns).join(&joint);
            format!("{} {} {}", vertical, body, vertical)
        })
        .collect()
}

fn plain_lines(cells: &[&str], widths: &[usize], aligns: &[Align]) -> Vec<String> {
    cell_lines(cells)
        .into_iter()
        .map(|parts| {
            padded(&parts, widths, aligns)
                .join(PLAIN_GAP)
                .trim_end()
                .to_string()
        })
        .collect()
}

fn padded(parts: &[&str], widths: &[usize], aligns: &[Align]) -> Vec<String> {
    parts
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((text, &width), &align)| pad_aligned(text, width, align))
        .collect()
}

/// Draws a horizontal rule with a joint at every column boundary.
fn horizontal_line(widths: &[usize], fill: char, left: char, joint: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|&w| std::iter::repeat_n(fill, w + 2).collect())
        .collect();
    format!("{}{}{}", left, segments.join(&joint.to_string()), right)
}
