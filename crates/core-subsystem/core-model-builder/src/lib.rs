// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Builds merged, queryable views of annotation metadata out of what a host environment reports
//! type by type.

pub mod annotated_class;
pub mod annotation_util;
pub mod config;
pub mod error;

pub use annotated_class::{AnnotatedClass, AnnotatedMethod, AnnotatedParam};
pub use config::IntrospectionConfig;
pub use error::ModelBuildingError;
