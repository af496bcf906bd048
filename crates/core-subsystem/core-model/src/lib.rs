// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Reflection model
//!
//! The types in this crate describe what a host environment knows about its types: their
//! annotations, their declared methods and parameters, and how they relate to each other through
//! superclasses and interfaces. The [`introspection::TypeIntrospector`] trait is the only way the
//! rest of the system reads that information, and [`registry::TypeRegistry`] is an in-memory
//! implementation of it.

pub mod annotation;
pub mod introspection;
pub mod method;
pub mod registry;
pub mod types;
pub mod vocabulary;
