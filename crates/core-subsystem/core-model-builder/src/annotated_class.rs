// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Aggregated annotation view of a type
//!
//! An [`AnnotatedClass`] flattens the annotation information of a type, its superclasses, its
//! interfaces and their superinterfaces into a single structure: one list of type-level
//! annotations, and one entry per logical method, each with one entry per parameter position.
//!
//! The hierarchy is visited depth first, the type itself before its interfaces (in declaration
//! order) and its interfaces before its superclass. Every merge keeps the annotations already
//! collected and only adds those whose type is missing, so a declaration made closer to the
//! queried type always wins over one inherited from further away, while annotations only present
//! on an ancestor are still picked up.
//!
//! Methods are matched by signature (name, return type and parameter types), never by where they
//! are declared. An interface method and its implementation therefore end up as a single
//! [`AnnotatedMethod`] that carries the annotations of both.

use serde::Serialize;
use tracing::{debug, trace};

use core_model::annotation::{Annotated, Annotation};
use core_model::introspection::TypeIntrospector;
use core_model::method::{Method, Parameter};
use core_model::types::{ClassRef, GenericType};

use crate::annotation_util::{
    find_annotation_in_any, find_annotation_in_method_or_in_its_annotations,
    merge_missing_annotations,
};
use crate::config::IntrospectionConfig;
use crate::error::ModelBuildingError;

#[derive(Serialize, Debug, Clone)]
pub struct AnnotatedClass {
    class: ClassRef,
    annotations: Vec<Annotation>,
    annotated_methods: Vec<AnnotatedMethod>,
}

impl AnnotatedClass {
    /// Builds the aggregated view of `class` with the default configuration.
    pub fn of(
        introspector: &dyn TypeIntrospector,
        class: &ClassRef,
    ) -> Result<Self, ModelBuildingError> {
        Self::of_with_config(introspector, class, &IntrospectionConfig::default())
    }

    pub fn of_with_config(
        introspector: &dyn TypeIntrospector,
        class: &ClassRef,
        config: &IntrospectionConfig,
    ) -> Result<Self, ModelBuildingError> {
        let mut accumulator = Accumulator {
            introspector,
            config,
            annotations: vec![],
            annotated_methods: vec![],
            path: vec![],
        };

        accumulator.merge(class)?;

        debug!(
            class = %class,
            annotations = accumulator.annotations.len(),
            methods = accumulator.annotated_methods.len(),
            "Built annotated class"
        );

        Ok(Self {
            class: class.clone(),
            annotations: accumulator.annotations,
            annotated_methods: accumulator.annotated_methods,
        })
    }

    /// The type this view was built for.
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Methods available on the type, in the order they were first encountered. Synthetic
    /// methods and the methods of the universal base type are not included.
    pub fn annotated_methods(&self) -> &[AnnotatedMethod] {
        &self.annotated_methods
    }

    /// The first method with the given name. Overloads can be told apart through
    /// [`AnnotatedClass::annotated_methods`].
    pub fn annotated_method(&self, name: &str) -> Option<&AnnotatedMethod> {
        self.annotated_methods
            .iter()
            .find(|annotated_method| annotated_method.name == name)
    }
}

impl Annotated for AnnotatedClass {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Annotation information of a method and its parameters, regardless of whether it was present
/// on the original declaration or on one of its overridden versions.
#[derive(Serialize, Debug, Clone)]
pub struct AnnotatedMethod {
    /// The first declaration encountered during the traversal, that is, the one closest to the
    /// queried type. Later declarations only contribute annotations.
    #[serde(skip)]
    pub method: Method,
    pub name: String,
    pub return_type: ClassRef,
    annotations: Vec<Annotation>,
    annotated_params: Vec<AnnotatedParam>,
}

impl AnnotatedMethod {
    fn new(method: Method) -> Self {
        Self {
            name: method.name.clone(),
            return_type: method.return_type.clone(),
            annotations: merge_missing_annotations(&[], &method.annotations),
            annotated_params: method.parameters.iter().map(AnnotatedParam::new).collect(),
            method,
        }
    }

    fn include_information_from(&mut self, method: &Method) {
        self.annotations = merge_missing_annotations(&self.annotations, &method.annotations);

        for (index, parameter) in method.parameters.iter().enumerate() {
            match self.annotated_params.get_mut(index) {
                Some(annotated_param) => annotated_param.merge(&parameter.annotations),
                None => self.annotated_params.push(AnnotatedParam::new(parameter)),
            }
        }
    }

    /// One entry per parameter position.
    pub fn annotated_params(&self) -> &[AnnotatedParam] {
        &self.annotated_params
    }

    /// Like [`Annotated::get_annotation`], but also looks one level up, at the annotations of
    /// the method's annotation types.
    pub fn find_annotation_in_method_or_in_its_annotations<K>(
        &self,
        key: &K,
    ) -> Option<&Annotation>
    where
        K: AsRef<ClassRef> + ?Sized,
    {
        find_annotation_in_method_or_in_its_annotations(self, key)
    }

    /// The first annotation of the requested type on any parameter, in position order.
    pub fn find_annotation_in_any_param<K>(&self, key: &K) -> Option<&Annotation>
    where
        K: AsRef<ClassRef> + ?Sized,
    {
        find_annotation_in_any(&self.annotated_params, key)
    }
}

impl Annotated for AnnotatedMethod {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct AnnotatedParam {
    pub parameter_class: ClassRef,
    pub generic_type: GenericType,
    annotations: Vec<Annotation>,
}

impl AnnotatedParam {
    fn new(parameter: &Parameter) -> Self {
        Self {
            parameter_class: parameter.class.clone(),
            generic_type: parameter.generic_type.clone(),
            annotations: merge_missing_annotations(&[], &parameter.annotations),
        }
    }

    fn merge(&mut self, annotations: &[Annotation]) {
        self.annotations = merge_missing_annotations(&self.annotations, annotations);
    }
}

impl Annotated for AnnotatedParam {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Mutable state while walking a hierarchy. Never escapes [`AnnotatedClass::of_with_config`].
struct Accumulator<'a> {
    introspector: &'a dyn TypeIntrospector,
    config: &'a IntrospectionConfig,
    annotations: Vec<Annotation>,
    annotated_methods: Vec<AnnotatedMethod>,
    /// Types from the queried one down to the one being merged.
    path: Vec<ClassRef>,
}

impl Accumulator<'_> {
    fn merge(&mut self, class: &ClassRef) -> Result<(), ModelBuildingError> {
        if *class == self.config.root_type {
            return Ok(());
        }

        // A type may legitimately be reached twice through different paths (diamond), but never
        // while it is still being merged
        if self.path.contains(class) {
            return Err(ModelBuildingError::CyclicHierarchy {
                class: class.clone(),
                path: self.path.clone(),
            });
        }

        if self.path.len() >= self.config.max_hierarchy_depth {
            return Err(ModelBuildingError::HierarchyTooDeep {
                class: self.path.first().unwrap_or(class).clone(),
                max_depth: self.config.max_hierarchy_depth,
            });
        }

        trace!(class = %class, depth = self.path.len(), "Merging type");

        self.path.push(class.clone());

        let declared_annotations = self.introspector.declared_annotations(class)?;
        self.annotations = merge_missing_annotations(&self.annotations, &declared_annotations);

        for method in self.introspector.declared_methods(class)? {
            self.merge_method(method);
        }

        for interface in self.introspector.interfaces(class)? {
            self.merge(&interface)?;
        }

        if let Some(superclass) = self.introspector.superclass(class)? {
            self.merge(&superclass)?;
        }

        self.path.pop();

        Ok(())
    }

    fn merge_method(&mut self, method: Method) {
        if method.synthetic {
            trace!(
                method = %method.name,
                class = %method.declaring_class,
                "Skipping synthetic method"
            );
            return;
        }

        let existing = self
            .annotated_methods
            .iter_mut()
            .find(|annotated_method| annotated_method.method.has_same_signature(&method));

        match existing {
            Some(annotated_method) => {
                trace!(
                    method = %method.name,
                    class = %method.declaring_class,
                    "Merging overridden method"
                );
                annotated_method.include_information_from(&method);
            }
            None => self.annotated_methods.push(AnnotatedMethod::new(method)),
        }
    }
}
