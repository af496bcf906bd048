// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! An in-memory host environment.
//!
//! [`TypeRegistry`] answers [`TypeIntrospector`] queries from [`TypeDeclaration`]s registered up
//! front. It mirrors the shape of a class-based runtime: every class without an explicit
//! superclass extends the universal base type (`Object`), which is pre-declared with its own
//! methods, while interfaces have no superclass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::annotation::{Annotated, Annotation};
use crate::introspection::{IntrospectionError, TypeIntrospector};
use crate::method::{Method, Parameter};
use crate::types::ClassRef;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: ClassRef,
    pub kind: TypeKind,
    pub annotations: Vec<Annotation>,
    pub methods: Vec<Method>,
    pub interfaces: Vec<ClassRef>,
    pub superclass: Option<ClassRef>,
}

impl TypeDeclaration {
    pub fn class(name: impl Into<ClassRef>) -> Self {
        Self::new(name.into(), TypeKind::Class, Some(ClassRef::object()))
    }

    pub fn interface(name: impl Into<ClassRef>) -> Self {
        Self::new(name.into(), TypeKind::Interface, None)
    }

    fn new(name: ClassRef, kind: TypeKind, superclass: Option<ClassRef>) -> Self {
        Self {
            name,
            kind,
            annotations: vec![],
            methods: vec![],
            interfaces: vec![],
            superclass,
        }
    }

    /// Replaces the superclass. Only meaningful for classes.
    pub fn extends(mut self, superclass: impl Into<ClassRef>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// A type that sits at the top of its hierarchy (such as a custom universal base type).
    pub fn without_superclass(mut self) -> Self {
        self.superclass = None;
        self
    }

    pub fn implements(mut self, interface: impl Into<ClassRef>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn annotated_with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        let method = method.declared_in(self.name.clone());
        self.methods.push(method);
        self
    }

    /// Looks up a declared method the way `Class.getDeclaredMethod` would: by name and exact
    /// parameter types.
    pub fn declared_method(&self, name: &str, parameter_types: &[ClassRef]) -> Option<&Method> {
        self.methods.iter().find(|method| {
            method.name == name && method.parameter_types().eq(parameter_types.iter())
        })
    }
}

impl Annotated for TypeDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: IndexMap<ClassRef, TypeDeclaration>,
}

impl TypeRegistry {
    /// A registry that knows only the universal base type.
    pub fn new() -> Self {
        let object = TypeDeclaration::class(ClassRef::object())
            .without_superclass()
            .with_method(
                Method::new("equals")
                    .returns("boolean")
                    .with_param(Parameter::new(ClassRef::object())),
            )
            .with_method(Method::new("hashCode").returns("int"))
            .with_method(Method::new("toString").returns("String"));

        let mut registry = Self {
            types: IndexMap::new(),
        };
        registry.register(object);
        registry
    }

    /// Adds (or replaces) a declaration.
    pub fn register(&mut self, declaration: TypeDeclaration) -> &mut Self {
        self.types.insert(declaration.name.clone(), declaration);
        self
    }

    pub fn with(mut self, declaration: TypeDeclaration) -> Self {
        self.register(declaration);
        self
    }

    pub fn get(&self, class: &ClassRef) -> Option<&TypeDeclaration> {
        self.types.get(class)
    }

    pub fn contains(&self, class: &ClassRef) -> bool {
        self.types.contains_key(class)
    }

    fn declaration(&self, class: &ClassRef) -> Result<&TypeDeclaration, IntrospectionError> {
        self.get(class)
            .ok_or_else(|| IntrospectionError::UnknownType(class.clone()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeIntrospector for TypeRegistry {
    fn declared_annotations(&self, class: &ClassRef) -> Result<Vec<Annotation>, IntrospectionError> {
        Ok(self.declaration(class)?.annotations.clone())
    }

    fn declared_methods(&self, class: &ClassRef) -> Result<Vec<Method>, IntrospectionError> {
        Ok(self.declaration(class)?.methods.clone())
    }

    fn interfaces(&self, class: &ClassRef) -> Result<Vec<ClassRef>, IntrospectionError> {
        Ok(self.declaration(class)?.interfaces.clone())
    }

    fn superclass(&self, class: &ClassRef) -> Result<Option<ClassRef>, IntrospectionError> {
        Ok(self.declaration(class)?.superclass.clone())
    }
}
