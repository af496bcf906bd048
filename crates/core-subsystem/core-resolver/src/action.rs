// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use core_model::types::ClassRef;

use crate::action_semantics::ActionSemantics;
use crate::error::ActionError;

/// Outcome of applying an [`Action`]. Failures of any stage end up here instead of escaping.
pub type ActionResult = Result<Value, ActionError>;

/// Obtains the value of one parameter (identified by its class) of an action out of a request.
pub type ParamProvider<R> =
    dyn Fn(&ActionSemantics, &R, &ClassRef) -> Result<Value, ActionError> + Send + Sync;

/// An [`ActionSemantics`] bound to a [`ParamProvider`], ready to be applied to requests.
pub struct Action<R> {
    semantics: ActionSemantics,
    provider: Arc<ParamProvider<R>>,
}

impl<R> Action<R> {
    pub(crate) fn new(semantics: ActionSemantics, provider: Arc<ParamProvider<R>>) -> Self {
        Self {
            semantics,
            provider,
        }
    }

    pub fn semantics(&self) -> &ActionSemantics {
        &self.semantics
    }

    /// Resolves every parameter of the action from `request`, in declaration order, and executes
    /// the action with them. Stops at the first parameter that can't be resolved.
    pub fn apply(&self, request: &R) -> ActionResult {
        let semantics = &self.semantics;

        let result = semantics
            .param_classes()
            .iter()
            .map(|class| (self.provider)(semantics, request, class))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|params| semantics.execute(params));

        match &result {
            Ok(_) => debug!(
                action = semantics.name(),
                resource = %semantics.resource(),
                "Applied action"
            ),
            Err(error) => warn!(
                action = semantics.name(),
                resource = %semantics.resource(),
                %error,
                "Action failed"
            ),
        }

        result
    }
}

impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        Self {
            semantics: self.semantics.clone(),
            provider: self.provider.clone(),
        }
    }
}

impl<R> Debug for Action<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("semantics", &self.semantics)
            .finish_non_exhaustive()
    }
}
