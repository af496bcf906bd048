// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// What an action operates on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "kind")]
pub enum Resource {
    /// A collection, served page by page
    Paged { name: String },
    /// A single element of a collection
    Item { name: String },
}

impl Resource {
    pub fn paged(name: impl Into<String>) -> Self {
        Resource::Paged { name: name.into() }
    }

    pub fn item(name: impl Into<String>) -> Self {
        Resource::Item { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Resource::Paged { name } | Resource::Item { name } => name,
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Paged { name } => write!(f, "Paged({name})"),
            Resource::Item { name } => write!(f, "Item({name})"),
        }
    }
}
