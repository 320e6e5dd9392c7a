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

use super::normalize;
use super::string_hash;

/// Number of positions derived for every item.
pub const NUM_HASHES: usize = 3;

/// Affine transforms `(multiplier, offset)` applied to the base hash before
/// normalization. Function `i` maps `h` to `h * multiplier + offset`.
const TRANSFORMS: [(i32, i32); NUM_HASHES] = [(1, 0), (2, 1), (3, 2)];

/// A fixed family of [`NUM_HASHES`] hash functions over a filter of `num_bits` bits.
///
/// All functions share one [`string_hash`] value and differ only by a multiply-add:
///
/// ```text
/// f1(s) = normalize(h,         m)
/// f2(s) = normalize(h * 2 + 1, m)
/// f3(s) = normalize(h * 3 + 2, m)
/// ```
///
/// The intermediate products wrap at 32 bits. A browser rendition that computes
/// `h * k + c` in double precision does not wrap, so positions differ from it whenever
/// that step overflows: `"banana"` maps to `[11, 9, 3]` here but `[11, 5, 17]` there.
///
/// The positions are correlated rather than independent, so two of them may coincide
/// for some items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashFamily {
    num_bits: usize,
}

impl HashFamily {
    /// Creates the family for a filter of `num_bits` bits.
    ///
    /// # Panics
    ///
    /// Panics if `num_bits` is zero.
    pub fn new(num_bits: usize) -> Self {
        assert!(num_bits > 0, "num_bits must be greater than 0");
        HashFamily { num_bits }
    }

    /// Returns the size of the index space.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Returns the positions of `item`, in function order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::hash::HashFamily;
    /// let family = HashFamily::new(18);
    /// assert_eq!(family.positions(""), [0, 1, 2]);
    /// assert_eq!(family.positions("apple"), [8, 17, 8]);
    /// ```
    pub fn positions(&self, item: &str) -> [usize; NUM_HASHES] {
        self.positions_of_hash(string_hash(item))
    }

    /// Returns the positions for an already computed base hash.
    pub fn positions_of_hash(&self, hash: i32) -> [usize; NUM_HASHES] {
        TRANSFORMS.map(|(multiplier, offset)| {
            let value = hash.wrapping_mul(multiplier).wrapping_add(offset);
            normalize(value, self.num_bits)
        })
    }
}
