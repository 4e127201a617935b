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

//! Serde-deserializable structs that mirror the openAIP XML structure.
//!
//! These are internal types used by the parser. They keep every leaf as the
//! raw attribute or text content; numbers and coordinate lists are parsed
//! when converting into the public [`airspace`](crate::airspace) types.
//!
//! The `AIRSPACES` and `GEOMETRY` containers are lists: their children are
//! collected across every occurrence of the container, in document order.

use serde::Deserialize;

/// The `OPENAIP` root element.
#[derive(Debug, Deserialize)]
pub(crate) struct OpenAipXml {
    #[serde(rename = "@VERSION", default)]
    pub version: String,
    #[serde(rename = "@DATAFORMAT", default)]
    pub data_format: String,
    #[serde(rename = "AIRSPACES", default)]
    pub airspaces: Vec<AirspacesXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspacesXml {
    #[serde(rename = "ASP", default)]
    pub asp: Vec<AirspaceXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceXml {
    #[serde(rename = "@CATEGORY", default)]
    pub category: String,
    #[serde(rename = "VERSION", default)]
    pub version: String,
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    #[serde(rename = "COUNTRY", default)]
    pub country: String,
    #[serde(rename = "NAME", default)]
    pub name: String,
    #[serde(rename = "ALTLIMIT_TOP", default)]
    pub alt_limit_top: Option<AltLimitXml>,
    #[serde(rename = "ALTLIMIT_BOTTOM", default)]
    pub alt_limit_bottom: Option<AltLimitXml>,
    #[serde(rename = "GEOMETRY", default)]
    pub geometry: Vec<GeometryXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AltLimitXml {
    #[serde(rename = "@REFERENCE", default)]
    pub reference: String,
    #[serde(rename = "ALT", default)]
    pub alt: Option<AltXml>,
}

/// An `ALT` element, e.g. `<ALT UNIT="FL">100</ALT>`.
#[derive(Debug, Deserialize)]
pub(crate) struct AltXml {
    #[serde(rename = "@UNIT", default)]
    pub unit: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeometryXml {
    #[serde(rename = "POLYGON", default)]
    pub polygons: Vec<PolygonXml>,
}

/// A `POLYGON` element whose text is the comma separated coordinate list.
#[derive(Debug, Deserialize)]
pub(crate) struct PolygonXml {
    #[serde(rename = "$text", default)]
    pub coordinates: String,
}
