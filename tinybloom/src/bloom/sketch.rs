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

use std::fmt;

use super::Membership;
use crate::error::Error;
use crate::hash::HashFamily;
use crate::hash::NUM_HASHES;
use crate::hash::string_hash;

/// A fixed-size Bloom filter over string items.
///
/// Provides membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - False positives whose rate grows with the number of bits set
/// - Constant space usage
///
/// Every item touches [`NUM_HASHES`] positions derived by a [`HashFamily`].
/// Use [`super::BloomFilterBuilder`] or [`BloomFilter::new`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Positions derived for each item; also carries the size (m)
    family: HashFamily,
    /// Count of bits set to 1 (for statistics)
    num_bits_set: usize,
    /// Bit array packed into u64 words
    /// Length = ceil(num_bits / 64)
    bit_array: Box<[u64]>,
}

impl BloomFilter {
    /// Creates an empty filter of `num_bits` bits.
    ///
    /// Shorthand for `BloomFilterBuilder::with_size(num_bits).build()`.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_bits` is 0 or exceeds
    /// [`MAX_NUM_BITS`](super::MAX_NUM_BITS).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilter;
    /// let filter = BloomFilter::new(18).unwrap();
    /// assert_eq!(filter.bits(), vec![0; 18]);
    ///
    /// assert!(BloomFilter::new(0).is_err());
    /// ```
    pub fn new(num_bits: usize) -> Result<Self, Error> {
        super::BloomFilterBuilder::with_size(num_bits).build()
    }

    /// Allocates a cleared filter. `num_bits` must already be validated.
    pub(super) fn with_num_bits(num_bits: usize) -> Self {
        let num_words = num_bits.div_ceil(64);
        BloomFilter {
            family: HashFamily::new(num_bits),
            num_bits_set: 0,
            bit_array: vec![0u64; num_words].into_boxed_slice(),
        }
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(18).unwrap();
    /// filter.insert("apple");
    ///
    /// assert!(filter.contains("apple"));
    /// assert!(!filter.contains("bloom"));
    /// ```
    pub fn contains(&self, item: &str) -> bool {
        if self.is_empty() {
            return false;
        }

        self.check_bits(&self.positions(item))
    }

    /// Same as [`contains()`](Self::contains), mapped to its display signal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::{BloomFilter, Membership};
    /// let mut filter = BloomFilter::new(18).unwrap();
    /// filter.insert("apple");
    ///
    /// assert_eq!(filter.query("apple"), Membership::MaybePresent);
    /// assert_eq!(filter.query("bloom").to_string(), "Definitely not present");
    /// ```
    pub fn query(&self, item: &str) -> Membership {
        Membership::from(self.contains(item))
    }

    /// Tests and inserts an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before insertion.
    /// The positions are hashed only once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(18).unwrap();
    ///
    /// let was_present = filter.contains_and_insert("apple");
    /// assert!(!was_present); // First insertion
    ///
    /// let was_present = filter.contains_and_insert("apple");
    /// assert!(was_present); // Now it's in the set
    /// ```
    pub fn contains_and_insert(&mut self, item: &str) -> bool {
        let positions = self.positions(item);
        let was_present = self.check_bits(&positions);
        self.set_bits(&positions);
        was_present
    }

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Inserting the same
    /// item again leaves the filter unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(18).unwrap();
    ///
    /// filter.insert("");
    /// assert_eq!(&filter.bits()[..4], &[1, 1, 1, 0]);
    /// ```
    pub fn insert(&mut self, item: &str) {
        let positions = self.positions(item);

        #[cfg(feature = "tracing")]
        tracing::trace!(?positions, "inserting item");

        self.set_bits(&positions);
    }

    /// Resets the filter to its initial empty state.
    ///
    /// Clears all bits while preserving the size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(18).unwrap();
    /// filter.insert("apple");
    /// assert!(!filter.is_empty());
    ///
    /// filter.reset();
    /// assert!(filter.is_empty());
    /// assert!(!filter.contains("apple"));
    /// ```
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(bits_cleared = self.num_bits_set, "resetting bloom filter");

        self.bit_array.fill(0);
        self.num_bits_set = 0;
    }

    /// Merges another filter into this one via bitwise OR (union).
    ///
    /// After merging, this filter will recognize items from either filter
    /// (plus any false positives from either).
    ///
    /// # Errors
    ///
    /// Returns an error if the filters have different sizes; this filter is left
    /// untouched in that case. Use [`is_compatible()`](Self::is_compatible) to check
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilter;
    /// let mut f1 = BloomFilter::new(64).unwrap();
    /// let mut f2 = BloomFilter::new(64).unwrap();
    ///
    /// f1.insert("a");
    /// f2.insert("b");
    ///
    /// f1.union(&f2).unwrap();
    /// assert!(f1.contains("a"));
    /// assert!(f1.contains("b"));
    /// ```
    pub fn union(&mut self, other: &BloomFilter) -> Result<(), Error> {
        if !self.is_compatible(other) {
            return Err(Error::incompatible_filters(self.capacity(), other.capacity()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            num_bits = self.capacity(),
            other_bits_used = other.num_bits_set,
            "merging bloom filters"
        );

        // Count bits during union operation (single pass)
        let mut num_bits_set = 0;
        for (word, other_word) in self.bit_array.iter_mut().zip(other.bit_array.iter()) {
            *word |= *other_word;
            num_bits_set += word.count_ones() as usize;
        }
        self.num_bits_set = num_bits_set;
        Ok(())
    }

    /// Returns the positions `item` maps to, in hash function order.
    ///
    /// Positions may repeat when two functions collide for this item.
    pub fn positions(&self, item: &str) -> [usize; NUM_HASHES] {
        self.family.positions_of_hash(string_hash(item))
    }

    /// Returns the bit array as an ordered sequence of 0/1 values.
    pub fn bits(&self) -> Vec<u8> {
        (0..self.capacity()).map(|i| u8::from(self.get_bit(i))).collect()
    }

    /// Returns the bit at `index`, or `None` if `index` is out of range.
    pub fn bit(&self, index: usize) -> Option<bool> {
        (index < self.capacity()).then(|| self.get_bit(index))
    }

    /// Returns whether the filter is empty (no bit set).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> usize {
        self.num_bits_set
    }

    /// Returns the total number of bits in the filter (capacity).
    pub fn capacity(&self) -> usize {
        self.family.num_bits()
    }

    /// Returns the number of hash functions used.
    pub fn num_hashes(&self) -> usize {
        NUM_HASHES
    }

    /// Returns the hash family used to derive positions.
    pub fn hash_family(&self) -> &HashFamily {
        &self.family
    }

    /// Returns the current load factor (fraction of bits set).
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.capacity() as f64
    }

    /// Checks if two filters are compatible for merging.
    ///
    /// Filters are compatible if they have the same number of bits; the hash family is
    /// fully determined by the size.
    pub fn is_compatible(&self, other: &BloomFilter) -> bool {
        self.family == other.family
    }

    /// Checks if all positions are set.
    fn check_bits(&self, positions: &[usize; NUM_HASHES]) -> bool {
        positions.iter().all(|&bit_index| self.get_bit(bit_index))
    }

    /// Sets all positions.
    fn set_bits(&mut self, positions: &[usize; NUM_HASHES]) {
        for &bit_index in positions {
            self.set_bit(bit_index);
        }
    }

    /// Gets the value of a single bit.
    fn get_bit(&self, bit_index: usize) -> bool {
        let word_index = bit_index >> 6; // Equivalent to bit_index / 64
        let mask = 1u64 << (bit_index & 63);
        (self.bit_array[word_index] & mask) != 0
    }

    /// Sets a single bit and updates the count if it wasn't already set.
    fn set_bit(&mut self, bit_index: usize) {
        let word_index = bit_index >> 6;
        let mask = 1u64 << (bit_index & 63);

        if (self.bit_array[word_index] & mask) == 0 {
            self.bit_array[word_index] |= mask;
            self.num_bits_set += 1;
        }
    }
}

/// Renders the bits as `[ 0, 1, 0 ]`.
impl fmt::Display for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for i in 0..self.capacity() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(self.get_bit(i)))?;
        }
        write!(f, " ]")
    }
}
