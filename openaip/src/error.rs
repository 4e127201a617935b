// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Errors returned while decoding an openAIP document.
///
/// Any error aborts the whole decode. No partially decoded document is ever
/// returned.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Malformed XML or a document shape the deserializer can't map.
    Xml(String),
    /// A leaf value (altitude, ID or coordinate) is not a valid number.
    InvalidValue { field: &'static str, value: String },
    /// A polygon has fewer than three coordinate pairs.
    InsufficientCoordinates { count: usize },
    /// A coordinate pair doesn't consist of exactly a longitude and latitude.
    InvalidCoordinate { token: String, fields: usize },
    /// The document's `DATAFORMAT` isn't supported by this parser.
    UnsupportedDataFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value:?}")
            }
            Self::InsufficientCoordinates { count } => {
                write!(f, "expected at least 3 coordinates, got {count}")
            }
            Self::InvalidCoordinate { token, fields } => {
                write!(f, "expected two values, got {fields}: {token:?}")
            }
            Self::UnsupportedDataFormat(found) => {
                write!(f, "unsupported data format: {found}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Self::Xml(e.to_string())
    }
}
