// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use apio_env::{EnvError, Environment};

pub const APIO_LOG: &str = "APIO_LOG";

pub const APIO_ROOT_TYPE: &str = "APIO_ROOT_TYPE";
pub const APIO_MAX_HIERARCHY_DEPTH: &str = "APIO_MAX_HIERARCHY_DEPTH";

pub const DEFAULT_ROOT_TYPE: &str = "Object";
pub const DEFAULT_MAX_HIERARCHY_DEPTH: usize = 64;

/// The universal base type whose members never take part in annotation aggregation.
pub fn get_root_type(env: &dyn Environment) -> Result<String, EnvError> {
    match env.get(APIO_ROOT_TYPE) {
        Some(value) if value.trim().is_empty() => Err(EnvError::InvalidValue {
            key: APIO_ROOT_TYPE.to_string(),
            value,
            message: "Expected a non-empty type name".to_string(),
        }),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(DEFAULT_ROOT_TYPE.to_string()),
    }
}

pub fn get_max_hierarchy_depth(env: &dyn Environment) -> Result<usize, EnvError> {
    let depth = env.get_usize(APIO_MAX_HIERARCHY_DEPTH, DEFAULT_MAX_HIERARCHY_DEPTH)?;

    if depth == 0 {
        return Err(EnvError::InvalidValue {
            key: APIO_MAX_HIERARCHY_DEPTH.to_string(),
            value: depth.to_string(),
            message: "Expected at least 1".to_string(),
        });
    }

    Ok(depth)
}
