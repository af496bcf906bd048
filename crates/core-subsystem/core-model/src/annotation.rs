// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Annotations
//!
//! An [`Annotation`] is a piece of declarative metadata attached to a type, a method or a
//! parameter. Every annotation is an instance of an [`AnnotationType`], which may itself carry
//! annotations (meta-annotations). For example, `Create` is an annotation type annotated with
//! `Action(name = "create", httpMethod = "POST")`.
//!
//! Annotation identity for merging and lookup purposes is the *type* name only: two `Type`
//! annotations with different values are still "the same annotation" when deciding which one to
//! keep.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::ClassRef;

/// Key under which single-valued annotations (such as `Type("BlogPosting")`) store their value.
pub const DEFAULT_VALUE_KEY: &str = "value";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotationType {
    pub name: ClassRef,
    /// Annotations declared on the annotation type itself.
    pub annotations: Vec<Annotation>,
}

impl AnnotationType {
    pub fn new(name: impl Into<ClassRef>) -> Self {
        Self {
            name: name.into(),
            annotations: vec![],
        }
    }

    pub fn annotated_with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl AsRef<ClassRef> for AnnotationType {
    fn as_ref(&self) -> &ClassRef {
        &self.name
    }
}

impl AsRef<ClassRef> for Arc<AnnotationType> {
    fn as_ref(&self) -> &ClassRef {
        &self.name
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Class(ClassRef),
    List(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnnotationValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            AnnotationValue::Class(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AnnotationValue]> {
        match self {
            AnnotationValue::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        AnnotationValue::String(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        AnnotationValue::String(value)
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        AnnotationValue::Integer(value)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        AnnotationValue::Boolean(value)
    }
}

impl From<ClassRef> for AnnotationValue {
    fn from(value: ClassRef) -> Self {
        AnnotationValue::Class(value)
    }
}

impl<T: Into<AnnotationValue>> From<Vec<T>> for AnnotationValue {
    fn from(values: Vec<T>) -> Self {
        AnnotationValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Annotation {
    #[serde(rename = "type")]
    annotation_type: Arc<AnnotationType>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    values: IndexMap<String, AnnotationValue>,
}

impl Annotation {
    pub fn new(annotation_type: Arc<AnnotationType>) -> Self {
        Self {
            annotation_type,
            values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: impl Into<AnnotationValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn with_default_value(self, value: impl Into<AnnotationValue>) -> Self {
        self.with_value(DEFAULT_VALUE_KEY, value)
    }

    pub fn annotation_type(&self) -> &Arc<AnnotationType> {
        &self.annotation_type
    }

    pub fn type_name(&self) -> &ClassRef {
        &self.annotation_type.name
    }

    pub fn is_of_type<K: AsRef<ClassRef> + ?Sized>(&self, key: &K) -> bool {
        self.type_name() == key.as_ref()
    }

    pub fn value(&self, key: &str) -> Option<&AnnotationValue> {
        self.values.get(key)
    }

    pub fn default_value(&self) -> Option<&AnnotationValue> {
        self.value(DEFAULT_VALUE_KEY)
    }

    pub fn values(&self) -> &IndexMap<String, AnnotationValue> {
        &self.values
    }
}

/// Returns the first annotation of the requested type, if any.
pub fn find_annotation<'a, K: AsRef<ClassRef> + ?Sized>(
    annotations: &'a [Annotation],
    key: &K,
) -> Option<&'a Annotation> {
    annotations
        .iter()
        .find(|annotation| annotation.is_of_type(key))
}

/// Anything that carries an ordered list of annotations.
///
/// Lookups are by annotation type and return the *first* matching annotation, so the order in
/// which implementors accumulate their annotations determines which one wins.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn get_annotation<K: AsRef<ClassRef> + ?Sized>(&self, key: &K) -> Option<&Annotation> {
        find_annotation(self.annotations(), key)
    }

    fn has_annotation<K: AsRef<ClassRef> + ?Sized>(&self, key: &K) -> bool {
        self.get_annotation(key).is_some()
    }
}

impl Annotated for AnnotationType {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Annotated for Vec<Annotation> {
    fn annotations(&self) -> &[Annotation] {
        self
    }
}
