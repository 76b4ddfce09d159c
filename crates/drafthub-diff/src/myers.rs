//! Myers shortest-edit-script line diff.
//!
//! Classic greedy O(N·D) forward search (Myers 1986) over lines, with the
//! common prefix and suffix trimmed before the search. Trimming is also
//! the tie-break between equally short edit scripts: of all minimal
//! alignments, the one with the longest leading unchanged run, then the
//! longest trailing unchanged run, is produced. Output is therefore fully
//! deterministic for identical inputs.
//!
//! A run of deletions immediately followed by insertions at the same
//! aligned position is collapsed pairwise into `Modify` entries; a
//! changed line counts as one modification, not one addition plus one
//! deletion.
//!
//! After trimming, the search always runs in one canonical orientation
//! of the two sides (lexicographically smaller side first) and the raw
//! script is mirrored back when the caller's order was the other one.
//! Swapping the arguments therefore swaps additions with deletions
//! exactly and keeps the modification count identical.

use crate::entry::DiffEntry;

/// One primitive move in the edit script, before modify collapsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawOp {
    /// Consume one line from both sides.
    Equal,
    /// Consume one line from the old side.
    Delete,
    /// Consume one line from the new side.
    Insert,
}

/// Compute the line-level diff between two pre-split line sequences.
///
/// Line numbers in the result are 1-based: new-side for `Add`,
/// `Modify`, and `Unchanged`, old-side for `Delete`.
pub fn diff<S: AsRef<str>>(old_lines: &[S], new_lines: &[S]) -> Vec<DiffEntry> {
    let n = old_lines.len();
    let m = new_lines.len();

    // Longest common prefix.
    let mut prefix = 0;
    while prefix < n && prefix < m && old_lines[prefix].as_ref() == new_lines[prefix].as_ref() {
        prefix += 1;
    }

    // Longest common suffix of what remains.
    let mut suffix = 0;
    while suffix < n - prefix
        && suffix < m - prefix
        && old_lines[n - 1 - suffix].as_ref() == new_lines[m - 1 - suffix].as_ref()
    {
        suffix += 1;
    }

    let mut entries = Vec::with_capacity(n.max(m));
    for (i, line) in new_lines[..prefix].iter().enumerate() {
        entries.push(DiffEntry::Unchanged {
            line_number: i + 1,
            content: line.as_ref().to_string(),
        });
    }

    let old_mid = &old_lines[prefix..n - suffix];
    let new_mid = &new_lines[prefix..m - suffix];

    // The greedy search can pick different snake alignments depending on
    // which side it walks, which would let the run pairing below produce
    // direction-dependent modify counts. Searching in one canonical
    // orientation and mirroring the script keeps the alignment, and with
    // it every count, symmetric under argument swap.
    let swapped = old_mid
        .iter()
        .map(|line| line.as_ref())
        .gt(new_mid.iter().map(|line| line.as_ref()));
    let mut ops = if swapped {
        shortest_edit(new_mid, old_mid)
    } else {
        shortest_edit(old_mid, new_mid)
    };
    if swapped {
        for op in &mut ops {
            *op = match *op {
                RawOp::Insert => RawOp::Delete,
                RawOp::Delete => RawOp::Insert,
                RawOp::Equal => RawOp::Equal,
            };
        }
    }
    assemble(&mut entries, &ops, old_mid, new_mid, prefix);

    for (i, line) in new_lines[m - suffix..].iter().enumerate() {
        entries.push(DiffEntry::Unchanged {
            line_number: m - suffix + i + 1,
            content: line.as_ref().to_string(),
        });
    }

    entries
}

/// Greedy forward Myers search returning the edit script in order.
fn shortest_edit<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<RawOp> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    if max == 0 {
        return Vec::new();
    }

    let offset = max;
    let width = (2 * max + 1) as usize;
    // v[k + offset] = furthest x reached on diagonal k.
    let mut v = vec![0isize; width];
    let mut trace: Vec<Vec<isize>> = Vec::new();
    let mut d_final = 0;

    'search: for d in 0..=max {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize].as_ref() == b[y as usize].as_ref() {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                d_final = d;
                break 'search;
            }
            k += 2;
        }
    }

    backtrack(&trace, d_final, offset, n, m)
}

/// Walk the search trace backwards from `(n, m)` to `(0, 0)`.
fn backtrack(trace: &[Vec<isize>], d_final: isize, offset: isize, n: isize, m: isize) -> Vec<RawOp> {
    let mut ops = Vec::with_capacity((n + m) as usize);
    let mut x = n;
    let mut y = m;

    for d in (1..=d_final).rev() {
        // State as of depth d - 1.
        let v = &trace[d as usize];
        let k = x - y;
        let idx = (k + offset) as usize;
        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            ops.push(RawOp::Equal);
            x -= 1;
            y -= 1;
        }
        if prev_k == k + 1 {
            ops.push(RawOp::Insert);
        } else {
            ops.push(RawOp::Delete);
        }
        x = prev_x;
        y = prev_y;
    }

    // The d = 0 leading snake, if any.
    while x > 0 && y > 0 {
        ops.push(RawOp::Equal);
        x -= 1;
        y -= 1;
    }

    ops.reverse();
    ops
}

/// Convert the raw edit script into diff entries, collapsing paired
/// delete/insert runs into `Modify`.
fn assemble<S: AsRef<str>>(
    entries: &mut Vec<DiffEntry>,
    ops: &[RawOp],
    a: &[S],
    b: &[S],
    base: usize,
) {
    // Pending (line_number, content) on each side of the current run.
    let mut dels: Vec<(usize, String)> = Vec::new();
    let mut adds: Vec<(usize, String)> = Vec::new();
    let mut ai = 0;
    let mut bi = 0;

    for op in ops {
        match op {
            RawOp::Equal => {
                flush(entries, &mut dels, &mut adds);
                entries.push(DiffEntry::Unchanged {
                    line_number: base + bi + 1,
                    content: b[bi].as_ref().to_string(),
                });
                ai += 1;
                bi += 1;
            }
            RawOp::Delete => {
                dels.push((base + ai + 1, a[ai].as_ref().to_string()));
                ai += 1;
            }
            RawOp::Insert => {
                adds.push((base + bi + 1, b[bi].as_ref().to_string()));
                bi += 1;
            }
        }
    }
    flush(entries, &mut dels, &mut adds);
}

/// Emit one changed run: paired entries become `Modify`, the surplus
/// stays pure `Delete` or `Add`.
fn flush(
    entries: &mut Vec<DiffEntry>,
    dels: &mut Vec<(usize, String)>,
    adds: &mut Vec<(usize, String)>,
) {
    let pairs = dels.len().min(adds.len());
    let extra_dels = dels.split_off(pairs);
    let extra_adds = adds.split_off(pairs);

    for ((_, old_content), (line_number, content)) in dels.drain(..).zip(adds.drain(..)) {
        entries.push(DiffEntry::Modify {
            line_number,
            old_content,
            content,
        });
    }
    for (line_number, content) in extra_dels {
        entries.push(DiffEntry::Delete {
            line_number,
            content,
        });
    }
    for (line_number, content) in extra_adds {
        entries.push(DiffEntry::Add {
            line_number,
            content,
        });
    }
}
