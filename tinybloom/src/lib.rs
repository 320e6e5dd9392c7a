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

//! # tinybloom
//!
//! A fixed-size Bloom filter over string items.
//!
//! The filter answers "maybe present" or "definitely not present" for any string, never
//! yielding a false negative. Each item sets three bits chosen by a small family of hash
//! functions derived from one 32-bit polynomial string hash.
//!
//! This library is divided into modules that constitute distinct groups of functionality:
//!
//! - [`bloom`]: the filter, its builder and the membership signal
//! - [`hash`]: the string hash and the position-deriving hash family
//! - [`error`]: the error type returned by fallible operations
//!
//! Enable the `tracing` feature to emit construction, reset and insert events through the
//! [`tracing`](https://docs.rs/tracing) crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;
