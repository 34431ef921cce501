//! Myers' diff
//!
//! Computes a shortest edit script between two sequences. Edits refer to
//! items by index so callers can map them back to the terms they came from
//! without cloning.

use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `a[a]` and `b[b]` are equal
    Equal { a: usize, b: usize },
    /// `a[a]` is absent from `b`
    Delete { a: usize },
    /// `b[b]` is absent from `a`
    Insert { b: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq> MyersDiff<'_, T> {
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 2];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // coming from k+1, an insertion
                    v[idx + 1]
                } else {
                    // coming from k-1, a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = x + y;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let came_from_insert = k == -d
                || (k != d && v[(offset + k - 1) as usize] < v[(offset + k + 1) as usize]);
            let prev_k = if came_from_insert { k + 1 } else { k - 1 };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    /// Shortest edit script turning `a` into `b`, in sequence order
    pub fn diff(&self) -> Vec<Edit> {
        let mut diff: Vec<Edit> = self
            .backtrack()
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    Edit::Insert {
                        b: prev_y as usize,
                    }
                } else if y == prev_y {
                    Edit::Delete {
                        a: prev_x as usize,
                    }
                } else {
                    Edit::Equal {
                        a: prev_x as usize,
                        b: prev_y as usize,
                    }
                }
            })
            .collect();

        diff.reverse();
        diff
    }
}
