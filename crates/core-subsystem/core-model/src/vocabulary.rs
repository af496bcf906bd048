// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The annotation types Apio resource authors use.
//!
//! Action annotations (`Create`, `Remove`, `Retrieve`, `Update`) are themselves annotated with an
//! `Action` describing the action name and HTTP verb, so that a scanner only needs to look for
//! `Action`, directly on a method or one level up on the method's annotations.

use std::sync::{Arc, LazyLock};

use crate::annotation::{Annotation, AnnotationType};

pub static ACTION: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| Arc::new(AnnotationType::new("Action")));

pub static CREATE: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| action_type("Create", "create", "POST"));
pub static REMOVE: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| action_type("Remove", "remove", "DELETE"));
pub static RETRIEVE: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| action_type("Retrieve", "retrieve", "GET"));
pub static UPDATE: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| action_type("Update", "update", "PUT"));

// Parameter markers
pub static ID: LazyLock<Arc<AnnotationType>> = LazyLock::new(|| marker_type("Id"));
pub static PARENT_ID: LazyLock<Arc<AnnotationType>> = LazyLock::new(|| marker_type("ParentId"));
pub static GENERIC_PARENT_ID: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| marker_type("GenericParentId"));
pub static BODY: LazyLock<Arc<AnnotationType>> = LazyLock::new(|| marker_type("Body"));

// Type markers
pub static TYPE: LazyLock<Arc<AnnotationType>> = LazyLock::new(|| marker_type("Type"));
pub static ENTRY_POINT: LazyLock<Arc<AnnotationType>> =
    LazyLock::new(|| marker_type("EntryPoint"));

pub const ACTION_NAME: &str = "name";
pub const ACTION_HTTP_METHOD: &str = "httpMethod";

/// An `Action(name, httpMethod)` annotation.
pub fn action(name: &str, http_method: &str) -> Annotation {
    Annotation::new(ACTION.clone())
        .with_value(ACTION_NAME, name)
        .with_value(ACTION_HTTP_METHOD, http_method)
}

/// An annotation of the given type without values.
pub fn marker(annotation_type: &Arc<AnnotationType>) -> Annotation {
    Annotation::new(annotation_type.clone())
}

/// A `Type("...")` annotation naming the resource type of a class.
pub fn type_name(value: &str) -> Annotation {
    Annotation::new(TYPE.clone()).with_default_value(value)
}

fn marker_type(name: &str) -> Arc<AnnotationType> {
    Arc::new(AnnotationType::new(name))
}

fn action_type(type_name: &str, name: &str, http_method: &str) -> Arc<AnnotationType> {
    Arc::new(AnnotationType::new(type_name).annotated_with(action(name, http_method)))
}
