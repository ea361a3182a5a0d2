//! LCS edit script
//!
//! Computes a line-level edit script between two documents using the longest
//! common subsequence table. The table is quadratic in line count, which is
//! acceptable for the small text files this engine targets; a binary file
//! without newlines degenerates to a single line.

use derive_new::new;
use std::fmt::Display;

type Lines<T> = Vec<Line<T>>;

/// One line of a document, 1-indexed
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Line<T> {
    number: usize,
    value: T,
}

/// One step of an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { line: Line<T> },
    Insert { line: Line<T> },
    Equal { line_a: Line<T>, line_b: Line<T> },
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { line } => format!("-{}", line.value.clone().into()),
            Edit::Insert { line } => format!("+{}", line.value.clone().into()),
            Edit::Equal { line_a, .. } => format!(" {}", line_a.value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// LCS diff between two line sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsDiff<T> {
    a: Lines<T>,
    b: Lines<T>,
}

impl<T: Eq + Clone> LcsDiff<T> {
    pub fn new(a: &[T], b: &[T]) -> Self {
        LcsDiff {
            a: Self::lines(a),
            b: Self::lines(b),
        }
    }

    fn lines(document: &[T]) -> Lines<T> {
        document
            .iter()
            .enumerate()
            .map(|(i, value)| Line::new(i + 1, value.clone()))
            .collect::<Vec<_>>()
    }

    /// Suffix LCS table: `table[i][j]` is the LCS length of `a[i..]` and `b[j..]`
    fn lcs_table(&self) -> Vec<Vec<usize>> {
        let (n, m) = (self.a.len(), self.b.len());
        let mut table = vec![vec![0; m + 1]; n + 1];

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                table[i][j] = if self.a[i].value == self.b[j].value {
                    table[i + 1][j + 1] + 1
                } else {
                    table[i + 1][j].max(table[i][j + 1])
                };
            }
        }

        table
    }

    /// Walk the table forward, always taking the direction that preserves the
    /// larger remaining common subsequence; ties resolve to deletion so old
    /// lines are emitted before their replacements.
    pub fn edits(&self) -> Vec<Edit<T>> {
        let table = self.lcs_table();
        let (n, m) = (self.a.len(), self.b.len());
        let (mut i, mut j) = (0, 0);
        let mut edits = Vec::new();

        while i < n || j < m {
            if i < n && j < m && self.a[i].value == self.b[j].value {
                edits.push(Edit::Equal {
                    line_a: self.a[i].clone(),
                    line_b: self.b[j].clone(),
                });
                i += 1;
                j += 1;
            } else if i < n && (j == m || table[i + 1][j] >= table[i][j + 1]) {
                edits.push(Edit::Delete {
                    line: self.a[i].clone(),
                });
                i += 1;
            } else {
                edits.push(Edit::Insert {
                    line: self.b[j].clone(),
                });
                j += 1;
            }
        }

        edits
    }

    /// Whether the two documents are line-for-line identical
    pub fn is_identical(&self) -> bool {
        self.a.len() == self.b.len()
            && self
                .a
                .iter()
                .zip(self.b.iter())
                .all(|(a, b)| a.value == b.value)
    }
}
