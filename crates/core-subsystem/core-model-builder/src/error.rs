// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use core_model::introspection::IntrospectionError;
use core_model::types::ClassRef;

#[derive(Error, Debug)]
pub enum ModelBuildingError {
    #[error("Could not introspect type: {0}")]
    Introspection(#[from] IntrospectionError),

    #[error("Type {class} is its own ancestor (reached through {})", display_path(.path))]
    CyclicHierarchy { class: ClassRef, path: Vec<ClassRef> },

    #[error("Type hierarchy of {class} is deeper than the configured maximum of {max_depth}")]
    HierarchyTooDeep { class: ClassRef, max_depth: usize },
}

fn display_path(path: &[ClassRef]) -> String {
    path.iter()
        .map(|class| class.name())
        .collect::<Vec<_>>()
        .join(" -> ")
}
