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

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use core_model::annotation::{Annotated, Annotation};
use core_model::types::ClassRef;

use crate::action::{Action, ParamProvider};
use crate::error::ActionError;
use crate::resource::Resource;

/// Runs an action with its parameters already resolved, in declaration order.
pub type ExecuteFunction = Arc<dyn Fn(Vec<Value>) -> Result<Value, ActionError> + Send + Sync>;

/// Everything needed to expose an action on a resource. Immutable once built.
///
/// Construction goes through a sequence of stages, each only reachable from the previous one, so
/// a value can never be missing a part:
///
/// ```ignore
/// ActionSemantics::of_resource(Resource::paged("blog-posting"))
///     .name("retrieve")
///     .method("GET")
///     .receives_params(["AcceptLanguage"])
///     .returns("Page")
///     .not_annotated()
///     .execute_function(retrieve_page)
///     .build()
/// ```
#[derive(Serialize, Clone)]
pub struct ActionSemantics {
    resource: Resource,
    name: String,
    method: String,
    param_classes: Vec<ClassRef>,
    return_class: ClassRef,
    annotations: Vec<Annotation>,
    #[serde(skip)]
    execute_function: ExecuteFunction,
}

impl ActionSemantics {
    pub fn of_resource(resource: Resource) -> NameStep {
        NameStep {
            draft: Draft {
                resource,
                name: String::new(),
                method: String::new(),
                param_classes: vec![],
                return_class: ClassRef::void(),
                annotations: vec![],
            },
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The HTTP method, upper-cased.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn param_classes(&self) -> &[ClassRef] {
        &self.param_classes
    }

    /// [`ClassRef::void`] for actions that return nothing.
    pub fn return_class(&self) -> &ClassRef {
        &self.return_class
    }

    pub fn execute_function(&self) -> &ExecuteFunction {
        &self.execute_function
    }

    /// Runs the execute function after checking that one value was supplied per parameter class.
    pub fn execute(&self, params: Vec<Value>) -> Result<Value, ActionError> {
        if params.len() != self.param_classes.len() {
            return Err(ActionError::InvalidArguments {
                expected: self.param_classes.len(),
                actual: params.len(),
            });
        }

        (self.execute_function)(params)
    }

    /// A copy of these semantics targeting another resource.
    pub fn with_resource(&self, resource: Resource) -> Self {
        debug!(action = %self.name, from = %self.resource, to = %resource, "Retargeting action");

        Self {
            resource,
            ..self.clone()
        }
    }

    /// Binds the semantics to a way of obtaining a value for each parameter class out of a
    /// request. The resulting [`Action`] resolves every parameter in order and then executes.
    pub fn to_action<R, F>(&self, provider: F) -> Action<R>
    where
        F: Fn(&ActionSemantics, &R, &ClassRef) -> Result<Value, ActionError> + Send + Sync + 'static,
    {
        let provider: Arc<ParamProvider<R>> = Arc::new(provider);
        Action::new(self.clone(), provider)
    }
}

impl Annotated for ActionSemantics {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Debug for ActionSemantics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSemantics")
            .field("resource", &self.resource)
            .field("name", &self.name)
            .field("method", &self.method)
            .field("param_classes", &self.param_classes)
            .field("return_class", &self.return_class)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// Fields collected so far. Later stages overwrite the defaults.
struct Draft {
    resource: Resource,
    name: String,
    method: String,
    param_classes: Vec<ClassRef>,
    return_class: ClassRef,
    annotations: Vec<Annotation>,
}

pub struct NameStep {
    draft: Draft,
}

impl NameStep {
    pub fn name(mut self, name: impl Into<String>) -> MethodStep {
        self.draft.name = name.into();
        MethodStep { draft: self.draft }
    }
}

pub struct MethodStep {
    draft: Draft,
}

impl MethodStep {
    /// Accepts an `http::Method` as well as any string, so that non-standard verbs can be used.
    pub fn method(mut self, method: impl AsRef<str>) -> ParamsStep {
        self.draft.method = method.as_ref().to_uppercase();
        ParamsStep { draft: self.draft }
    }
}

pub struct ParamsStep {
    draft: Draft,
}

impl ParamsStep {
    pub fn receives_params<I, C>(mut self, param_classes: I) -> ReturnStep
    where
        I: IntoIterator<Item = C>,
        C: Into<ClassRef>,
    {
        self.draft.param_classes = param_classes.into_iter().map(Into::into).collect();
        ReturnStep { draft: self.draft }
    }

    pub fn receives_no_params(self) -> ReturnStep {
        ReturnStep { draft: self.draft }
    }
}

pub struct ReturnStep {
    draft: Draft,
}

impl ReturnStep {
    pub fn returns(mut self, return_class: impl Into<ClassRef>) -> AnnotationsStep {
        self.draft.return_class = return_class.into();
        AnnotationsStep { draft: self.draft }
    }

    pub fn returns_nothing(self) -> AnnotationsStep {
        AnnotationsStep { draft: self.draft }
    }
}

pub struct AnnotationsStep {
    draft: Draft,
}

impl AnnotationsStep {
    pub fn annotated_with(
        mut self,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> ExecuteStep {
        self.draft.annotations = annotations.into_iter().collect();
        ExecuteStep { draft: self.draft }
    }

    pub fn not_annotated(self) -> ExecuteStep {
        ExecuteStep { draft: self.draft }
    }
}

pub struct ExecuteStep {
    draft: Draft,
}

impl ExecuteStep {
    pub fn execute_function<F>(self, execute_function: F) -> BuildStep
    where
        F: Fn(Vec<Value>) -> Result<Value, ActionError> + Send + Sync + 'static,
    {
        BuildStep {
            draft: self.draft,
            execute_function: Arc::new(execute_function),
        }
    }
}

pub struct BuildStep {
    draft: Draft,
    execute_function: ExecuteFunction,
}

impl BuildStep {
    pub fn build(self) -> ActionSemantics {
        let Draft {
            resource,
            name,
            method,
            param_classes,
            return_class,
            annotations,
        } = self.draft;

        ActionSemantics {
            resource,
            name,
            method,
            param_classes,
            return_class,
            annotations,
            execute_function: self.execute_function,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use core_model::annotation::AnnotationType;
    use http::Method;
    use multiplatform_test::multiplatform_test;

    use super::*;

    fn my_annotation() -> Annotation {
        Annotation::new(Arc::new(AnnotationType::new("MyAnnotation")))
    }

    fn join(params: Vec<Value>) -> Result<Value, ActionError> {
        let parts = params
            .iter()
            .map(|param| {
                param
                    .as_str()
                    .ok_or_else(|| ActionError::Generic(format!("Expected a string, got {param}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Value::from(parts.join("-")))
    }

    fn strings(values: &[&str]) -> Vec<Value> {
        values.iter().map(|&value| Value::from(value)).collect()
    }

    #[multiplatform_test]
    fn builder_creates_action_semantics() {
        let semantics = ActionSemantics::of_resource(Resource::paged("name"))
            .name("action")
            .method(Method::GET)
            .receives_params(["String", "Long"])
            .returns("Long")
            .annotated_with([my_annotation()])
            .execute_function(join)
            .build();

        assert_eq!(semantics.resource(), &Resource::paged("name"));
        assert_eq!(semantics.name(), "action");
        assert_eq!(semantics.method(), "GET");
        assert_eq!(
            semantics.param_classes(),
            &[ClassRef::new("String"), ClassRef::new("Long")]
        );
        assert_eq!(semantics.return_class(), &ClassRef::new("Long"));
        assert_eq!(semantics.annotations(), &[my_annotation()]);

        let result = (semantics.execute_function())(strings(&["1", "2"])).unwrap();
        assert_eq!(result, Value::from("1-2"));
    }

    #[multiplatform_test]
    fn omitted_parts_take_empty_defaults() {
        let semantics = ActionSemantics::of_resource(Resource::paged("name"))
            .name("action")
            .method(Method::GET)
            .receives_no_params()
            .returns_nothing()
            .not_annotated()
            .execute_function(join)
            .build();

        assert!(semantics.param_classes().is_empty());
        assert_eq!(semantics.return_class(), &ClassRef::void());
        assert!(semantics.annotations().is_empty());

        // The execute function itself does not know about the declared parameters
        let result = (semantics.execute_function())(strings(&["1", "2"])).unwrap();
        assert_eq!(result, Value::from("1-2"));
    }

    #[multiplatform_test]
    fn partial_omissions_keep_supplied_parts() {
        let without_params = ActionSemantics::of_resource(Resource::paged("name"))
            .name("action")
            .method(Method::GET)
            .receives_no_params()
            .returns("Long")
            .annotated_with([my_annotation()])
            .execute_function(join)
            .build();

        assert!(without_params.param_classes().is_empty());
        assert_eq!(without_params.return_class(), &ClassRef::new("Long"));
        assert_eq!(without_params.annotations(), &[my_annotation()]);

        let without_return = ActionSemantics::of_resource(Resource::paged("name"))
            .name("action")
            .method(Method::GET)
            .receives_no_params()
            .returns_nothing()
            .annotated_with([my_annotation()])
            .execute_function(join)
            .build();

        assert_eq!(without_return.return_class(), &ClassRef::void());
        assert!(without_return.has_annotation(&ClassRef::new("MyAnnotation")));
    }

    #[multiplatform_test]
    fn string_methods_are_upper_cased() {
        let build = |method: &str| {
            ActionSemantics::of_resource(Resource::paged("name"))
                .name("action")
                .method(method)
                .receives_no_params()
                .returns_nothing()
                .not_annotated()
                .execute_function(join)
                .build()
        };

        assert_eq!(build("POST").method(), "POST");
        assert_eq!(build("post").method(), Method::POST.as_str());
        assert_eq!(build("purge").method(), "PURGE");
    }

    #[multiplatform_test]
    fn with_resource_changes_only_the_resource() {
        let semantics = ActionSemantics::of_resource(Resource::paged("name"))
            .name("retrieve")
            .method("GET")
            .receives_no_params()
            .returns("Page")
            .not_annotated()
            .execute_function(|_| Ok(Value::Null))
            .build();

        let retargeted = semantics.with_resource(Resource::item("name"));

        assert_eq!(semantics.resource(), &Resource::paged("name"));
        assert_eq!(retargeted.resource(), &Resource::item("name"));
        assert_ne!(retargeted.resource(), semantics.resource());

        assert_eq!(retargeted.name(), semantics.name());
        assert_eq!(retargeted.method(), semantics.method());
        assert_eq!(retargeted.param_classes(), semantics.param_classes());
        assert_eq!(retargeted.return_class(), semantics.return_class());
        assert_eq!(retargeted.annotations(), semantics.annotations());
        assert!(Arc::ptr_eq(
            retargeted.execute_function(),
            semantics.execute_function()
        ));
    }

    #[multiplatform_test]
    fn execute_checks_arity() {
        let semantics = ActionSemantics::of_resource(Resource::item("name"))
            .name("update")
            .method(Method::PUT)
            .receives_params(["String", "long"])
            .returns("String")
            .not_annotated()
            .execute_function(join)
            .build();

        assert_eq!(
            semantics.execute(strings(&["a", "b"])).unwrap(),
            Value::from("a-b")
        );
        assert!(matches!(
            semantics.execute(strings(&["a"])),
            Err(ActionError::InvalidArguments {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[multiplatform_test]
    fn serializes_without_execute_function() {
        let semantics = ActionSemantics::of_resource(Resource::item("blog-posting"))
            .name("remove")
            .method(Method::DELETE)
            .receives_params(["long"])
            .returns_nothing()
            .not_annotated()
            .execute_function(|_| Ok(Value::Null))
            .build();

        assert_eq!(
            serde_json::to_value(&semantics).unwrap(),
            serde_json::json!({
                "resource": { "kind": "Item", "name": "blog-posting" },
                "name": "remove",
                "method": "DELETE",
                "param_classes": ["long"],
                "return_class": "Void",
                "annotations": []
            })
        );
    }
}
