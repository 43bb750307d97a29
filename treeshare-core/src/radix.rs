//! Mixed-radix codec
//!
//! Converts between an integer and a fixed-length, most-significant-first
//! digit tuple in a given base. Range is not validated: callers only pass
//! values below `base^digits.len()`, and any higher part is dropped.

/// Decompose `value` into `out.len()` base-`base` digits, most significant first
pub fn to_digits(mut value: usize, base: usize, out: &mut [usize]) {
    for digit in out.iter_mut().rev() {
        *digit = value % base;
        value /= base;
    }
}

/// Recombine most-significant-first base-`base` digits into an integer
pub fn from_digits(digits: &[usize], base: usize) -> usize {
    digits.iter().fold(0, |acc, &d| acc * base + d)
}

/// Allocating form of [`to_digits`]
pub fn digits(value: usize, base: usize, depth: usize) -> Vec<usize> {
    let mut out = vec![0; depth];
    to_digits(value, base, &mut out);
    out
}
