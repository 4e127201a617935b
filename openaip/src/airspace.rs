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

//! Public openAIP record types returned by [`decode`](crate::decode).
//!
//! The records keep the vocabulary of the openAIP file: categories, units and
//! reference datums are plain strings exactly as they appear in the document.
//! Only numbers and coordinate lists are parsed.

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Altitude value with the unit it is given in (e.g. `"FL"`, `"F"`, `"M"`).
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Altitude {
    /// Unit from the `UNIT` attribute. Empty if the attribute is absent.
    pub unit: String,
    pub value: f64,
}

/// Vertical limit of an airspace.
///
/// The [`reference`](Self::reference) is the datum the altitude is measured
/// from, e.g. `"STD"` for standard pressure or `"MSL"` for mean sea level.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AltitudeLimit {
    pub reference: String,
    pub value: Altitude,
}

/// Boundary of an airspace as `(longitude, latitude)` pairs.
///
/// The coordinates are kept in the order of the document. The polygon is not
/// required to be closed, see [`is_closed`](Self::is_closed).
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub coordinates: Vec<(f64, f64)>,
}

/// A single airspace of an openAIP document.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Airspace {
    /// Category from the `CATEGORY` attribute (e.g. `"CTR"`, `"WAVE"`).
    pub category: String,
    pub version: String,
    pub id: i64,
    /// Country code (e.g. `"DE"`).
    pub country: String,
    pub name: String,
    pub altitude_top: AltitudeLimit,
    pub altitude_bottom: AltitudeLimit,
    pub polygons: Vec<Polygon>,
}

/// A decoded openAIP document.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Document {
    pub version: String,
    /// Format of the document. Always [`SUPPORTED_DATA_FORMAT`] for a
    /// document returned by the parser.
    ///
    /// [`SUPPORTED_DATA_FORMAT`]: crate::SUPPORTED_DATA_FORMAT
    pub data_format: String,
    pub airspaces: Vec<Airspace>,
}

impl Polygon {
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns `true` if the first and last coordinate are equal.
    pub fn is_closed(&self) -> bool {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(first), Some(last)) => self.coordinates.len() > 1 && first == last,
            _ => false,
        }
    }
}

impl Document {
    /// Returns the airspace with the `id`.
    pub fn find(&self, id: i64) -> Option<&Airspace> {
        self.airspaces.iter().find(|airspace| airspace.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Airspace> {
        self.airspaces.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Airspace;
    type IntoIter = std::slice::Iter<'a, Airspace>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Altitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.unit, self.value)
        }
    }
}

impl Display for AltitudeLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.reference.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.reference)
        }
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: {} ({}) | {}/{}",
            self.name, self.category, self.country, self.altitude_top, self.altitude_bottom
        )
    }
}
