// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identity of a type (class, interface, annotation type or primitive), compared by name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ClassRef(String);

impl ClassRef {
    pub const VOID: &'static str = "Void";
    pub const OBJECT: &'static str = "Object";

    pub fn new(name: impl Into<String>) -> Self {
        ClassRef(name.into())
    }

    /// The type used to represent "returns nothing".
    pub fn void() -> Self {
        ClassRef::new(Self::VOID)
    }

    /// The default universal base type.
    pub fn object() -> Self {
        ClassRef::new(Self::OBJECT)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The name without any package or module qualification (`java.lang.String` and
    /// `std::string::String` both become `String`).
    pub fn simple_name(&self) -> &str {
        let name = self.0.as_str();
        let after_path = name.rsplit("::").next().unwrap_or(name);
        after_path.rsplit('.').next().unwrap_or(after_path)
    }

    pub fn is_void(&self) -> bool {
        self.0 == Self::VOID
    }
}

impl Display for ClassRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassRef {
    fn from(name: &str) -> Self {
        ClassRef::new(name)
    }
}

impl From<String> for ClassRef {
    fn from(name: String) -> Self {
        ClassRef(name)
    }
}

impl From<&ClassRef> for ClassRef {
    fn from(class: &ClassRef) -> Self {
        class.clone()
    }
}

impl AsRef<ClassRef> for ClassRef {
    fn as_ref(&self) -> &ClassRef {
        self
    }
}

/// The declared (possibly generic) type of a parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum GenericType {
    Class(ClassRef), // e.g. `String`
    Parameterized {
        raw: ClassRef,               // e.g. `List` in `List<String>`
        arguments: Vec<GenericType>, // e.g. `[String]` in `List<String>`
    },
    Variable(String),        // e.g. `T`
    Array(Box<GenericType>), // e.g. `T[]`
}

impl GenericType {
    /// The class a value of this type is erased to. Type variables erase to the universal base
    /// type.
    pub fn raw_class(&self) -> ClassRef {
        match self {
            GenericType::Class(class) => class.clone(),
            GenericType::Parameterized { raw, .. } => raw.clone(),
            GenericType::Variable(_) => ClassRef::object(),
            GenericType::Array(element) => {
                ClassRef::new(format!("{}[]", element.raw_class().name()))
            }
        }
    }
}

impl From<ClassRef> for GenericType {
    fn from(class: ClassRef) -> Self {
        GenericType::Class(class)
    }
}

impl Display for GenericType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericType::Class(class) => write!(f, "{class}"),
            GenericType::Parameterized { raw, arguments } => {
                write!(f, "{raw}<")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ">")
            }
            GenericType::Variable(name) => write!(f, "{name}"),
            GenericType::Array(element) => write!(f, "{element}[]"),
        }
    }
}
