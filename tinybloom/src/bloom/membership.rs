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

/// Outcome of a membership query, as shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Every position was set: the item was inserted, or this is a false positive.
    MaybePresent,
    /// At least one position was unset: the item was never inserted.
    DefinitelyNotPresent,
}

impl Membership {
    /// Returns whether the item may be in the set.
    pub fn is_maybe_present(self) -> bool {
        matches!(self, Membership::MaybePresent)
    }

    /// Convert this outcome into its display text.
    pub const fn into_static(self) -> &'static str {
        match self {
            Membership::MaybePresent => "Maybe present",
            Membership::DefinitelyNotPresent => "Definitely not present",
        }
    }
}

impl From<bool> for Membership {
    fn from(contains: bool) -> Self {
        if contains {
            Membership::MaybePresent
        } else {
            Membership::DefinitelyNotPresent
        }
    }
}

impl From<Membership> for bool {
    fn from(membership: Membership) -> Self {
        membership.is_maybe_present()
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into_static())
    }
}
