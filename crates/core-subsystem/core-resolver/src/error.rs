// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use core_model::types::ClassRef;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Action expects {expected} parameters, but received {actual}")]
    InvalidArguments { expected: usize, actual: usize },

    #[error("Could not provide a value for parameter of type {class}: {message}")]
    ParamResolution { class: ClassRef, message: String },

    #[error("{0}")]
    Execution(#[from] anyhow::Error),

    #[error("{0}")]
    Generic(String),
}
