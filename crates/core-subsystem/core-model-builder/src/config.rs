// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use apio_env::{EnvError, Environment, SystemEnvironment};
use common::env_const::{
    DEFAULT_MAX_HIERARCHY_DEPTH, DEFAULT_ROOT_TYPE, get_max_hierarchy_depth, get_root_type,
};
use core_model::types::ClassRef;

/// Settings for walking a type hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct IntrospectionConfig {
    /// The universal base type. Neither it nor anything above it is visited.
    pub root_type: ClassRef,
    /// Longest chain of types (the queried type included) a traversal may follow.
    pub max_hierarchy_depth: usize,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            root_type: ClassRef::new(DEFAULT_ROOT_TYPE),
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }
}

impl IntrospectionConfig {
    /// Reads `APIO_ROOT_TYPE` and `APIO_MAX_HIERARCHY_DEPTH`.
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        Ok(Self {
            root_type: ClassRef::new(get_root_type(env)?),
            max_hierarchy_depth: get_max_hierarchy_depth(env)?,
        })
    }

    /// Reads the configuration from the process environment.
    pub fn from_system_env() -> Result<Self, EnvError> {
        Self::from_env(&SystemEnvironment)
    }

    pub fn with_root_type(mut self, root_type: impl Into<ClassRef>) -> Self {
        self.root_type = root_type.into();
        self
    }

    pub fn with_max_hierarchy_depth(mut self, max_hierarchy_depth: usize) -> Self {
        self.max_hierarchy_depth = max_hierarchy_depth;
        self
    }
}
