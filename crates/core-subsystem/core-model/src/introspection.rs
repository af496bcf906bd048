// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::annotation::Annotation;
use crate::method::Method;
use crate::types::ClassRef;

/// Reflective access to the types of a host environment.
///
/// Each query is about what a type *directly* declares. Walking superclasses and interfaces is
/// left to the caller.
pub trait TypeIntrospector {
    fn declared_annotations(&self, class: &ClassRef) -> Result<Vec<Annotation>, IntrospectionError>;

    /// Declared methods in declaration order, including synthetic ones.
    fn declared_methods(&self, class: &ClassRef) -> Result<Vec<Method>, IntrospectionError>;

    /// Directly implemented (or, for interfaces, extended) interfaces in declaration order.
    fn interfaces(&self, class: &ClassRef) -> Result<Vec<ClassRef>, IntrospectionError>;

    /// `None` for interfaces and for the universal base type.
    fn superclass(&self, class: &ClassRef) -> Result<Option<ClassRef>, IntrospectionError>;
}

#[derive(Error, Debug, PartialEq)]
pub enum IntrospectionError {
    #[error("Unknown type {0}")]
    UnknownType(ClassRef),

    #[error("{0}")]
    Generic(String),
}
