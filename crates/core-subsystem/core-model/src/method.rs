// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::annotation::{Annotated, Annotation};
use crate::types::{ClassRef, GenericType};

/// A method as declared by one particular type.
///
/// The same logical method may be declared several times across a type hierarchy (for example,
/// in an interface and in the class implementing it). Such declarations are distinct `Method`
/// values that share a signature (see [`Method::has_same_signature`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Method {
    pub declaring_class: ClassRef,
    pub name: String,
    pub return_type: ClassRef,
    pub parameters: Vec<Parameter>,
    pub annotations: Vec<Annotation>,
    /// Compiler-generated (for example, a bridge method). Synthetic methods never show up in
    /// aggregated views.
    pub synthetic: bool,
}

impl Method {
    /// A method returning nothing, with no parameters or annotations. The declaring class is
    /// filled in when the method is added to a type declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            declaring_class: ClassRef::default(),
            name: name.into(),
            return_type: ClassRef::void(),
            parameters: vec![],
            annotations: vec![],
            synthetic: false,
        }
    }

    pub fn declared_in(mut self, declaring_class: impl Into<ClassRef>) -> Self {
        self.declaring_class = declaring_class.into();
        self
    }

    pub fn returns(mut self, return_type: impl Into<ClassRef>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn annotated_with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = &ClassRef> {
        self.parameters.iter().map(|parameter| &parameter.class)
    }

    /// Structural identity: same name, same return type and the same parameter types in the same
    /// order. Where the method is declared and how it is annotated do not matter.
    pub fn has_same_signature(&self, other: &Method) -> bool {
        self.name == other.name
            && self.return_type == other.return_type
            && self.parameter_types().eq(other.parameter_types())
    }
}

impl Annotated for Method {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Parameter {
    pub class: ClassRef,
    pub generic_type: GenericType,
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    pub fn new(class: impl Into<ClassRef>) -> Self {
        let class = class.into();

        Self {
            generic_type: GenericType::Class(class.clone()),
            class,
            annotations: vec![],
        }
    }

    /// A parameter whose declared type is generic. The raw class is the type's erasure.
    pub fn generic(generic_type: GenericType) -> Self {
        Self {
            class: generic_type.raw_class(),
            generic_type,
            annotations: vec![],
        }
    }

    pub fn annotated_with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl Annotated for Parameter {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
