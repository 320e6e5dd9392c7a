// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hashing primitives used to map string items onto filter positions.
//!
//! Every position is derived from a single 32-bit polynomial string hash: the classic
//! `h = 31 * h + c` recurrence over UTF-16 code units, wrapped to a signed 32-bit integer
//! after every step. A [`HashFamily`] turns that one value into [`NUM_HASHES`] positions
//! with small affine transforms.

mod family;

pub use self::family::HashFamily;
pub use self::family::NUM_HASHES;

/// Multiplier of the polynomial string hash.
const STRING_HASH_MULTIPLIER: i32 = 31;

/// Computes the 32-bit polynomial hash of `item`.
///
/// The string is iterated by UTF-16 code unit, so characters outside the basic
/// multilingual plane contribute two steps (one per surrogate). Arithmetic wraps at
/// every step, which keeps the result identical to any implementation that uses
/// 32-bit two's-complement integers.
///
/// # Examples
///
/// ```
/// # use tinybloom::hash::string_hash;
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("a"), 97);
/// assert_eq!(string_hash("apple"), 93029210);
/// ```
pub fn string_hash(item: &str) -> i32 {
    item.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(STRING_HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

/// Maps a signed hash value into `[0, num_bits)`.
///
/// Equivalent to `((value % num_bits) + num_bits) % num_bits`, so negative inputs land
/// in range as well.
///
/// # Panics
///
/// Panics if `num_bits` is zero. Filters never call it with zero since construction
/// rejects that size.
pub fn normalize(value: i32, num_bits: usize) -> usize {
    assert!(num_bits > 0, "num_bits must be greater than 0");
    // i128 holds every i32 and every usize without overflow.
    i128::from(value).rem_euclid(num_bits as i128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        assert_eq!(string_hash("apple"), 93029210);
        assert_eq!(string_hash("banana"), -1396355227);
        assert_eq!(string_hash("hello world"), 1794106052);
    }

    #[test]
    fn test_string_hash_wraps() {
        // Long inputs overflow 32 bits many times over; the result must still be stable.
        let long = "x".repeat(10_000);
        assert_eq!(string_hash(&long), string_hash(&long));

        let mut expected = 0i32;
        for _ in 0..10_000 {
            expected = expected.wrapping_mul(31).wrapping_add(i32::from(b'x'));
        }
        assert_eq!(string_hash(&long), expected);
    }

    #[test]
    fn test_string_hash_iterates_utf16_code_units() {
        assert_eq!(string_hash("é"), 233);
        // U+1F600 is encoded as the surrogate pair 0xD83D 0xDE00.
        assert_eq!(string_hash("😀"), 0xD83D * 31 + 0xDE00);
        assert_eq!(string_hash("😀"), 1772899);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0, 18), 0);
        assert_eq!(normalize(17, 18), 17);
        assert_eq!(normalize(18, 18), 0);
        assert_eq!(normalize(-1, 18), 17);
        assert_eq!(normalize(-18, 18), 0);
        assert_eq!(normalize(-19, 18), 17);
        assert_eq!(normalize(i32::MIN, 18), 16);
        assert_eq!(normalize(i32::MAX, 18), 1);
        assert_eq!(normalize(12345, 1), 0);
    }

    #[test]
    fn test_normalize_large_num_bits() {
        let num_bits = i32::MAX as usize;
        assert_eq!(normalize(-1, num_bits), num_bits - 1);
        assert_eq!(normalize(i32::MAX, num_bits), 0);
    }

    #[test]
    fn test_normalize_full_usize_range() {
        assert_eq!(normalize(-1, usize::MAX), usize::MAX - 1);
        assert_eq!(normalize(i32::MIN, usize::MAX), usize::MAX - (1usize << 31));
        assert_eq!(normalize(i32::MAX, usize::MAX), i32::MAX as usize);
    }

    #[test]
    #[should_panic(expected = "num_bits must be greater than 0")]
    fn test_normalize_zero_num_bits() {
        normalize(1, 0);
    }
}
