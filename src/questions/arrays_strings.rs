//! Chapter 1: arrays and strings.

use fnv::FnvBuildHasher;
use hashbrown::{HashMap, HashSet};

use crate::error::{Result, StructureError};

/// True if no character occurs twice.
pub fn is_unique(s: &str) -> bool {
    let mut seen: HashSet<char, FnvBuildHasher> = HashSet::default();
    s.chars().all(|c| seen.insert(c))
}

/// Bit-vector variant of [`is_unique`] for lowercase ASCII input.
///
/// Any other character gives `InvalidArgument`.
#[cfg(feature = "bitvec")]
pub fn is_unique_bits(s: &str) -> Result<bool> {
    use bitvec::prelude::{BitVec, Lsb0};

    let mut seen: BitVec<u8, Lsb0> = BitVec::repeat(false, 26);
    for c in s.chars() {
        if !c.is_ascii_lowercase() {
            return Err(StructureError::invalid_argument(format!(
                "'{c}' is not a lowercase ASCII letter"
            )));
        }
        if seen.replace(letter_index(c), true) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if `a` and `b` hold the same characters with the same counts.
pub fn is_permutation(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<char, isize, FnvBuildHasher> = HashMap::default();
    for c in a.chars() {
        *counts.entry(c).or_default() += 1;
    }
    for c in b.chars() {
        let count = counts.entry(c).or_default();
        *count -= 1;
        if *count < 0 {
            return false;
        }
    }
    counts.values().all(|&n| n == 0)
}

/// Replaces each space in the first `true_len` characters with `%20`, in place.
///
/// The buffer must have room for the expanded text; anything after it is left
/// untouched.
pub fn urlify(buf: &mut [char], true_len: usize) -> Result<()> {
    if true_len > buf.len() {
        return Err(StructureError::out_of_bounds(true_len, buf.len()));
    }
    let spaces = buf[..true_len].iter().filter(|&&c| c == ' ').count();
    let needed = true_len + 2 * spaces;
    if needed > buf.len() {
        return Err(StructureError::invalid_argument(format!(
            "buffer of {} cannot hold {} characters",
            buf.len(),
            needed
        )));
    }

    let mut write = needed;
    for read in (0..true_len).rev() {
        if buf[read] == ' ' {
            buf[write - 3..write].copy_from_slice(&['%', '2', '0']);
            write -= 3;
        } else {
            buf[write - 1] = buf[read];
            write -= 1;
        }
    }
    Ok(())
}

/// True if the letters of `s` can be rearranged into a palindrome.
///
/// Case is ignored and non-letters are skipped.
pub fn is_permutation_of_palindrome(s: &str) -> bool {
    let mut odd: HashSet<char, FnvBuildHasher> = HashSet::default();
    for c in s.chars().filter(|c| c.is_alphabetic()) {
        for lower in c.to_lowercase() {
            if !odd.remove(&lower) {
                odd.insert(lower);
            }
        }
    }
    odd.len() <= 1
}

/// Bit-vector variant of [`is_permutation_of_palindrome`] for ASCII letters.
#[cfg(feature = "bitvec")]
pub fn is_permutation_of_palindrome_bits(s: &str) -> bool {
    use bitvec::prelude::{BitVec, Lsb0};

    let mut odd: BitVec<u8, Lsb0> = BitVec::repeat(false, 26);
    for c in s.chars().filter(char::is_ascii_alphabetic) {
        let i = letter_index(c.to_ascii_lowercase());
        let flipped = !odd[i];
        odd.set(i, flipped);
    }
    odd.count_ones() <= 1
}

#[cfg(feature = "bitvec")]
#[inline]
fn letter_index(c: char) -> usize {
    (c as u8 - b'a') as usize
}

/// True if `a` becomes `b` with at most one insertion, removal or replacement.
pub fn one_edit_away(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if long.len() - short.len() > 1 {
        return false;
    }

    let (mut i, mut j) = (0, 0);
    let mut edited = false;
    while i < short.len() && j < long.len() {
        if short[i] != long[j] {
            if edited {
                return false;
            }
            edited = true;
            // Replacement advances both sides, insertion only the longer one.
            if short.len() == long.len() {
                i += 1;
            }
        } else {
            i += 1;
        }
        j += 1;
    }
    true
}

/// Run-length encodes `s` as `a2b1...`, returning `s` itself when that is not shorter.
pub fn compress_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }
        out.push(c);
        out.push_str(&run.to_string());
    }
    if out.len() < s.len() {
        out
    } else {
        s.to_owned()
    }
}

/// Rotates a square matrix 90 degrees clockwise, in place, layer by layer.
pub fn rotate_matrix<T: Copy>(matrix: &mut [Vec<T>]) -> Result<()> {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return Err(StructureError::invalid_argument("matrix is not square"));
    }
    for layer in 0..n / 2 {
        let last = n - 1 - layer;
        for i in layer..last {
            let offset = i - layer;
            let top = matrix[layer][i];
            // left -> top
            matrix[layer][i] = matrix[last - offset][layer];
            // bottom -> left
            matrix[last - offset][layer] = matrix[last][last - offset];
            // right -> bottom
            matrix[last][last - offset] = matrix[i][last];
            // top -> right
            matrix[i][last] = top;
        }
    }
    Ok(())
}

/// Zeroes every row and column that contains a zero (`T::default()`).
pub fn zero_matrix<T: Default + PartialEq + Copy>(matrix: &mut [Vec<T>]) {
    let zero = T::default();
    let mut rows: HashSet<usize, FnvBuildHasher> = HashSet::default();
    let mut cols: HashSet<usize, FnvBuildHasher> = HashSet::default();
    for (r, row) in matrix.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if *cell == zero {
                rows.insert(r);
                cols.insert(c);
            }
        }
    }
    for (r, row) in matrix.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if rows.contains(&r) || cols.contains(&c) {
                *cell = zero;
            }
        }
    }
}

/// True if `b` is a rotation of `a`, using a single substring check.
pub fn is_rotation(a: &str, b: &str) -> bool {
    a.len() == b.len() && format!("{a}{a}").contains(b)
}
