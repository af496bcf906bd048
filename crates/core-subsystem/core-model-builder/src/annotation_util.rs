// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Merging and lookup primitives shared by every level of the aggregated view.

use core_model::annotation::{Annotated, Annotation, find_annotation};
use core_model::method::Method;
use core_model::types::ClassRef;

/// Returns `existing` followed by each annotation of `incoming` whose type is not already present,
/// either in `existing` or earlier in `incoming`.
///
/// The result is not symmetric: when both sides carry an annotation of the same type, the one in
/// `existing` is kept. Callers merge the most specific declarations first so that they win.
pub fn merge_missing_annotations(
    existing: &[Annotation],
    incoming: &[Annotation],
) -> Vec<Annotation> {
    incoming
        .iter()
        .fold(existing.to_vec(), |mut merged, annotation| {
            if find_annotation(&merged, annotation.type_name()).is_none() {
                merged.push(annotation.clone());
            }
            merged
        })
}

/// Finds an annotation of the requested type declared on `method`, or failing that, one declared
/// on the type of any of the method's annotations (one level of meta-annotation).
pub fn find_annotation_in_method_or_in_its_annotations<'a, M, K>(
    method: &'a M,
    key: &K,
) -> Option<&'a Annotation>
where
    M: Annotated + ?Sized,
    K: AsRef<ClassRef> + ?Sized,
{
    method.get_annotation(key).or_else(|| {
        method
            .annotations()
            .iter()
            .find_map(|annotation| annotation.annotation_type().get_annotation(key))
    })
}

/// Finds the first annotation of the requested type on any of the method's parameters, scanning
/// them in order.
pub fn find_annotation_in_any_parameter<'a, K>(method: &'a Method, key: &K) -> Option<&'a Annotation>
where
    K: AsRef<ClassRef> + ?Sized,
{
    find_annotation_in_any(&method.parameters, key)
}

pub(crate) fn find_annotation_in_any<'a, A, K>(items: &'a [A], key: &K) -> Option<&'a Annotation>
where
    A: Annotated,
    K: AsRef<ClassRef> + ?Sized,
{
    items.iter().find_map(|item| item.get_annotation(key))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use core_model::annotation::AnnotationType;
    use core_model::method::Parameter;
    use core_model::vocabulary::{self, ACTION, CREATE, ID, REMOVE, TYPE};
    use multiplatform_test::multiplatform_test;

    use super::*;

    fn path() -> Arc<AnnotationType> {
        Arc::new(AnnotationType::new("Path"))
    }

    fn produces() -> Arc<AnnotationType> {
        Arc::new(AnnotationType::new("Produces"))
    }

    fn string_value<'a>(annotation: &'a Annotation, key: &str) -> Option<&'a str> {
        annotation.value(key).and_then(|value| value.as_str())
    }

    #[multiplatform_test]
    fn merge_only_adds_missing_annotations() {
        let existing = vec![
            vocabulary::type_name("Good"),
            Annotation::new(produces()).with_default_value("application/json"),
        ];
        let incoming = vec![
            vocabulary::type_name("Bad"),
            Annotation::new(path()).with_default_value("/apio"),
        ];

        let annotations = merge_missing_annotations(&existing, &incoming);

        assert_eq!(annotations.len(), 3);

        assert!(annotations[0].is_of_type(&*TYPE));
        assert_eq!(string_value(&annotations[0], "value"), Some("Good"));

        assert!(annotations[1].is_of_type(&produces()));
        assert_eq!(
            string_value(&annotations[1], "value"),
            Some("application/json")
        );

        assert!(annotations[2].is_of_type(&path()));
        assert_eq!(string_value(&annotations[2], "value"), Some("/apio"));
    }

    #[multiplatform_test]
    fn merge_is_identity_when_incoming_types_are_present() {
        let existing = vec![
            vocabulary::type_name("Good"),
            Annotation::new(path()).with_default_value("/good"),
        ];
        let incoming = vec![Annotation::new(path()).with_default_value("/bad")];

        assert_eq!(merge_missing_annotations(&existing, &incoming), existing);
        assert_eq!(merge_missing_annotations(&existing, &[]), existing);
        assert_eq!(merge_missing_annotations(&existing, &existing), existing);
    }

    #[multiplatform_test]
    fn merge_into_empty_keeps_incoming_order() {
        let incoming = vec![
            Annotation::new(path()),
            vocabulary::type_name("BlogPosting"),
        ];

        assert_eq!(merge_missing_annotations(&[], &incoming), incoming);
    }

    #[multiplatform_test]
    fn merge_keeps_first_of_repeated_incoming_types() {
        let existing = vec![Annotation::new(path()).with_default_value("/good")];
        let incoming = vec![
            vocabulary::type_name("First"),
            Annotation::new(path()).with_default_value("/bad"),
            vocabulary::type_name("Second"),
        ];

        let annotations = merge_missing_annotations(&existing, &incoming);

        assert_eq!(annotations.len(), 2);
        assert_eq!(string_value(&annotations[0], "value"), Some("/good"));
        assert_eq!(string_value(&annotations[1], "value"), Some("First"));

        let deduplicated = merge_missing_annotations(&[], &incoming);
        assert_eq!(deduplicated.len(), 2);
        assert_eq!(string_value(&deduplicated[0], "value"), Some("First"));
    }

    #[multiplatform_test]
    fn finds_action_directly_or_through_annotation_type() {
        let annotated_with_action = Method::new("annotatedWithAction")
            .annotated_with(vocabulary::action("name", "GET"));
        let annotated_with_create =
            Method::new("annotatedWithCreate").annotated_with(vocabulary::marker(&CREATE));
        let annotated_with_remove =
            Method::new("annotatedWithRemove").annotated_with(vocabulary::marker(&REMOVE));
        let not_annotated = Method::new("notAnnotated");

        let action =
            find_annotation_in_method_or_in_its_annotations(&annotated_with_action, &*ACTION)
                .unwrap();
        assert_eq!(string_value(action, vocabulary::ACTION_NAME), Some("name"));
        assert_eq!(
            string_value(action, vocabulary::ACTION_HTTP_METHOD),
            Some("GET")
        );

        let action =
            find_annotation_in_method_or_in_its_annotations(&annotated_with_create, &*ACTION)
                .unwrap();
        assert_eq!(string_value(action, vocabulary::ACTION_NAME), Some("create"));
        assert_eq!(
            string_value(action, vocabulary::ACTION_HTTP_METHOD),
            Some("POST")
        );

        let action =
            find_annotation_in_method_or_in_its_annotations(&annotated_with_remove, &*ACTION)
                .unwrap();
        assert_eq!(string_value(action, vocabulary::ACTION_NAME), Some("remove"));
        assert_eq!(
            string_value(action, vocabulary::ACTION_HTTP_METHOD),
            Some("DELETE")
        );

        assert!(
            find_annotation_in_method_or_in_its_annotations(&not_annotated, &*ACTION).is_none()
        );
    }

    #[multiplatform_test]
    fn direct_annotation_wins_over_meta_annotation() {
        let method = Method::new("create")
            .annotated_with(vocabulary::marker(&CREATE))
            .annotated_with(vocabulary::action("custom", "PATCH"));

        let action = find_annotation_in_method_or_in_its_annotations(&method, &*ACTION).unwrap();

        assert_eq!(string_value(action, vocabulary::ACTION_NAME), Some("custom"));
    }

    #[multiplatform_test]
    fn finds_annotation_in_any_parameter() {
        let with_parameter_annotated = Method::new("withParameterAnnotated")
            .with_param(Parameter::new("long").annotated_with(vocabulary::marker(&ID)));
        let with_parameters_not_annotated =
            Method::new("withParametersNotAnnotated").with_param(Parameter::new("long"));
        let not_annotated = Method::new("notAnnotated");

        let id = find_annotation_in_any_parameter(&with_parameter_annotated, &*ID);
        assert!(id.is_some_and(|annotation| annotation.is_of_type(&*ID)));

        assert!(find_annotation_in_any_parameter(&with_parameters_not_annotated, &*ID).is_none());
        assert!(find_annotation_in_any_parameter(&not_annotated, &*ID).is_none());
    }

    #[multiplatform_test]
    fn parameter_scan_returns_first_position() {
        let method = Method::new("update")
            .with_param(Parameter::new("String"))
            .with_param(
                Parameter::new("long")
                    .annotated_with(Annotation::new(ID.clone()).with_default_value("first")),
            )
            .with_param(
                Parameter::new("long")
                    .annotated_with(Annotation::new(ID.clone()).with_default_value("second")),
            );

        let id = find_annotation_in_any_parameter(&method, &*ID).unwrap();

        assert_eq!(string_value(id, "value"), Some("first"));
    }
}
