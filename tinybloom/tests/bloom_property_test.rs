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

use proptest::prelude::*;
use tinybloom::bloom::BloomFilter;
use tinybloom::hash::HashFamily;

#[derive(Debug, Clone)]
enum Operation {
    Insert(String),
    Contains(String),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<String>().prop_map(Operation::Insert),
        any::<String>().prop_map(Operation::Contains),
    ]
}

proptest! {
    #[test]
    fn test_no_false_negatives(
        num_bits in 1usize..512,
        item in any::<String>(),
        ops in proptest::collection::vec(operation(), 0..50),
    ) {
        let mut filter = BloomFilter::new(num_bits).unwrap();
        filter.insert(&item);

        for op in ops {
            match op {
                Operation::Insert(other) => filter.insert(&other),
                Operation::Contains(other) => {
                    filter.contains(&other);
                }
            }
        }

        prop_assert!(filter.contains(&item));
    }

    #[test]
    fn test_positions_in_bounds(num_bits in 1usize..100_000, item in any::<String>()) {
        let family = HashFamily::new(num_bits);
        for position in family.positions(&item) {
            prop_assert!(position < num_bits);
        }
    }

    #[test]
    fn test_positions_deterministic(num_bits in 1usize..4096, item in any::<String>()) {
        let first = HashFamily::new(num_bits).positions(&item);
        let second = HashFamily::new(num_bits).positions(&item);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_insert_idempotent(
        items in proptest::collection::vec(any::<String>(), 1..20),
    ) {
        let mut once = BloomFilter::new(18).unwrap();
        let mut twice = BloomFilter::new(18).unwrap();
        for item in &items {
            once.insert(item);
            twice.insert(item);
            twice.insert(item);
        }
        prop_assert_eq!(once.bits(), twice.bits());
        prop_assert_eq!(once.bits_used(), twice.bits_used());
    }

    #[test]
    fn test_reset_restores_empty(
        items in proptest::collection::vec(any::<String>(), 0..20),
        probe in any::<String>(),
    ) {
        let mut filter = BloomFilter::new(18).unwrap();
        for item in &items {
            filter.insert(item);
        }

        filter.reset();
        prop_assert_eq!(filter.bits(), vec![0u8; 18]);
        for position in filter.positions(&probe) {
            prop_assert_eq!(filter.bit(position), Some(false));
        }
        prop_assert!(!filter.contains(&probe));
        prop_assert_eq!(filter, BloomFilter::new(18).unwrap());
    }

    #[test]
    fn test_contains_after_reset_reads_bits(
        before in proptest::collection::vec(any::<String>(), 1..20),
        after in any::<String>(),
        probe in any::<String>(),
    ) {
        let mut filter = BloomFilter::new(18).unwrap();
        for item in &before {
            filter.insert(item);
        }
        filter.reset();
        filter.insert(&after);

        let all_set = filter
            .positions(&probe)
            .iter()
            .all(|&p| filter.bit(p) == Some(true));
        prop_assert_eq!(filter.contains(&probe), all_set);
        let after_positions = filter.positions(&after);
        let covered = filter
            .positions(&probe)
            .iter()
            .all(|p| after_positions.contains(p));
        prop_assert_eq!(filter.contains(&probe), covered);
    }

    #[test]
    fn test_insert_touches_at_most_three_bits(item in any::<String>()) {
        let mut filter = BloomFilter::new(18).unwrap();
        filter.insert(&item);
        prop_assert!((1..=3).contains(&filter.bits_used()));
    }
}
