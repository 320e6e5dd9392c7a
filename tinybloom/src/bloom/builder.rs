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

use super::BloomFilter;
use crate::error::Error;

/// Size of the reference configuration.
pub const DEFAULT_NUM_BITS: usize = 18;
/// Smallest accepted filter size.
pub const MIN_NUM_BITS: usize = 1;
/// Largest accepted filter size.
pub const MAX_NUM_BITS: usize = i32::MAX as usize;

/// Builder for creating [`BloomFilter`] instances.
///
/// [`Default`] yields the reference configuration of [`DEFAULT_NUM_BITS`] bits;
/// [`with_size()`](Self::with_size) picks the bit count directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilterBuilder {
    num_bits: usize,
}

impl Default for BloomFilterBuilder {
    fn default() -> Self {
        BloomFilterBuilder {
            num_bits: DEFAULT_NUM_BITS,
        }
    }
}

impl BloomFilterBuilder {
    /// Creates a builder for a filter of exactly `num_bits` bits.
    ///
    /// The size is validated by [`build()`](Self::build).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinybloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(18).build().unwrap();
    /// assert_eq!(filter.capacity(), 18);
    /// ```
    pub fn with_size(num_bits: usize) -> Self {
        BloomFilterBuilder { num_bits }
    }

    /// Returns the configured number of bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Builds the Bloom filter with all bits cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of bits is 0 or exceeds [`MAX_NUM_BITS`].
    pub fn build(self) -> Result<BloomFilter, Error> {
        if !(MIN_NUM_BITS..=MAX_NUM_BITS).contains(&self.num_bits) {
            return Err(Error::invalid_num_bits(self.num_bits));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(num_bits = self.num_bits, "building bloom filter");

        Ok(BloomFilter::with_num_bits(self.num_bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_is_reference_configuration() {
        let builder = BloomFilterBuilder::default();
        assert_eq!(builder.num_bits(), DEFAULT_NUM_BITS);
        let filter = builder.build().unwrap();
        assert_eq!(filter.capacity(), 18);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_with_size() {
        let filter = BloomFilterBuilder::with_size(1).build().unwrap();
        assert_eq!(filter.capacity(), 1);
        let filter = BloomFilterBuilder::with_size(1000).build().unwrap();
        assert_eq!(filter.capacity(), 1000);
        assert_eq!(filter.bits().len(), 1000);
    }

    #[test]
    fn test_zero_bits_rejected() {
        let err = BloomFilterBuilder::with_size(0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "num_bits must be a positive integer");
    }

    #[test]
    fn test_too_many_bits_rejected() {
        let err = BloomFilterBuilder::with_size(MAX_NUM_BITS + 1)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context("num_bits"), Some("2147483648"));
    }
}
