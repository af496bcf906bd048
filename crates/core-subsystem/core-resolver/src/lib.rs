// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resource actions: what they operate on, what they receive and return, how they are annotated
//! and how they execute.
//!
//! An [`ActionSemantics`] is built through a fixed sequence of stages (see
//! [`ActionSemantics::of_resource`]) and turned into a callable [`Action`] once a way to resolve
//! its parameters from a request is known.

mod action;
mod action_semantics;
mod error;
mod resource;

pub use action::{Action, ActionResult, ParamProvider};
pub use action_semantics::{
    ActionSemantics, AnnotationsStep, BuildStep, ExecuteFunction, ExecuteStep, MethodStep,
    NameStep, ParamsStep, ReturnStep,
};
pub use error::ActionError;
pub use resource::Resource;
