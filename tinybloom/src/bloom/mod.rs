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

//! Bloom Filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was inserted, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never inserted
//! - **Fixed size**: The bit count is chosen at construction and never changes
//! - **Insert-only**: Items cannot be removed; [`BloomFilter::reset`] clears everything
//!
//! # Usage
//!
//! ```rust
//! use tinybloom::bloom::BloomFilter;
//! use tinybloom::bloom::BloomFilterBuilder;
//!
//! // The reference configuration: 18 bits
//! let mut filter = BloomFilterBuilder::default().build().unwrap();
//!
//! // Insert items
//! filter.insert("apple");
//! filter.insert("");
//!
//! // Check membership
//! assert!(filter.contains("apple")); // true - inserted
//! assert!(!filter.contains("bloom")); // false - never inserted
//!
//! // Inspect the bits
//! println!("Bloom Filter Bits: {filter}");
//! println!("Result: {}", filter.query("banana"));
//!
//! // Clear everything
//! filter.reset();
//! assert!(filter.is_empty());
//! ```
//!
//! # Creating Filters
//!
//! ## By Size
//!
//! ```rust
//! # use tinybloom::bloom::BloomFilter;
//! # use tinybloom::bloom::BloomFilterBuilder;
//! let filter = BloomFilterBuilder::with_size(1024).build().unwrap();
//! let same = BloomFilter::new(1024).unwrap();
//! assert_eq!(filter, same);
//! ```
//!
//! # Implementation Details
//!
//! - Three positions per item, derived from one 32-bit polynomial string hash by affine
//!   transforms (see [`crate::hash::HashFamily`])
//! - Bits packed in `u64` words
//! - No serialization format; a filter lives only in memory

mod builder;
mod membership;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::DEFAULT_NUM_BITS;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MIN_NUM_BITS;
pub use self::membership::Membership;
pub use self::sketch::BloomFilter;
