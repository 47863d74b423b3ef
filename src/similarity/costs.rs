//! Weighted edit distance between digests.
//!
//! Restricted Damerau-Levenshtein: insertions, deletions, substitutions and
//! swaps of two adjacent characters, each with its own cost. Characters are
//! compared as Unicode scalar values.

use serde::{Deserialize, Serialize};

/// Cost profile for [`Costs::distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Costs {
    pub insert: u32,
    pub delete: u32,
    pub change: u32,
    pub swap: u32,
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            change: 2,
            swap: 2,
        }
    }
}

impl Costs {
    /// Every operation costs 1 (optimal string alignment distance).
    pub const fn unit() -> Self {
        Self {
            insert: 1,
            delete: 1,
            change: 1,
            swap: 1,
        }
    }

    /// Fills the full `(len(a)+1) x (len(b)+1)` table.
    pub fn matrix(&self, a: &str, b: &str) -> CostMatrix {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut m = CostMatrix::zeroed(a.len() + 1, b.len() + 1);

        for i in 0..=a.len() {
            m.set(i, 0, (i as u32).saturating_mul(self.delete));
        }
        for j in 0..=b.len() {
            m.set(0, j, (j as u32).saturating_mul(self.insert));
        }

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let mut cost = if a[i - 1] == b[j - 1] {
                    m.get(i - 1, j - 1)
                } else {
                    let del = m.get(i - 1, j).saturating_add(self.delete);
                    let ins = m.get(i, j - 1).saturating_add(self.insert);
                    let sub = m.get(i - 1, j - 1).saturating_add(self.change);
                    del.min(ins).min(sub)
                };
                if i > 1 && j > 1 && a[i - 2] == b[j - 1] && a[i - 1] == b[j - 2] {
                    cost = cost.min(m.get(i - 2, j - 2).saturating_add(self.swap));
                }
                m.set(i, j, cost);
            }
        }
        m
    }

    pub fn distance(&self, a: &str, b: &str) -> u32 {
        self.matrix(a, b).final_cost()
    }
}

/// Row-major table of prefix distances. `get(i, j)` is the distance between
/// the first `i` characters of `a` and the first `j` characters of `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl CostMatrix {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, v: u32) {
        self.cells[i * self.cols + j] = v;
    }

    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Distance between the full strings.
    pub fn final_cost(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Distance under the default cost profile.
pub fn distance(a: &str, b: &str) -> u32 {
    Costs::default().distance(a, b)
}

/// Cost matrix under the default cost profile.
pub fn matrix(a: &str, b: &str) -> CostMatrix {
    Costs::default().matrix(a, b)
}
