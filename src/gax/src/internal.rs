// Copyright 2025 AWS Cloud Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements common code for generated enumerations.
//!
//! Not intended for general use. The types and functions in this module are
//! undocumented on purpose; they may change without notice.

use std::marker::PhantomData;

/// Deserializes an AWS string enumeration into `T`.
///
/// The generated enumerations accept any string, mapping values outside the
/// closed set of known values to their `UnknownValue` variant. The generator
/// writes one `Deserialize` impl per enumeration, each delegating to this
/// visitor with the enumeration's name for error reporting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<'lf, T> {
    name: &'lf str,
    _unused: PhantomData<T>,
}

impl<'lf, T> EnumVisitor<'lf, T> {
    pub fn new(name: &'lf str) -> Self {
        Self {
            name,
            _unused: Default::default(),
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} enum value in string format", self.name)
    }
}
