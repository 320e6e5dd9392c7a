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

use tinybloom::bloom::BloomFilterBuilder;

fn main() {
    // The reference configuration: 18 bits, three hash functions
    let mut filter = BloomFilterBuilder::default().build().unwrap();
    println!("Created bloom filter with {} bits", filter.capacity());
    println!("Bloom Filter Bits: {filter}");

    println!("\nAdding \"apple\" and \"banana\"...");
    for item in ["apple", "banana"] {
        println!("  {item:?} -> positions {:?}", filter.positions(item));
        filter.insert(item);
    }
    println!("Bloom Filter Bits: {filter}");
    println!("Bits used: {}", filter.bits_used());
    println!("Load factor: {:.2}", filter.load_factor());

    println!("\nSearching...");
    for item in ["apple", "banana", "cherry", "bloom"] {
        println!("  {item:?}: {}", filter.query(item));
    }

    println!("\nResetting...");
    filter.reset();
    println!("Bloom Filter Bits: {filter}");
    println!("  \"apple\": {}", filter.query("apple"));
}
