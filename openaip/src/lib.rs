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

//! openAIP airspace parser
//!
//! This crate decodes the airspace files published by [openAIP] in the XML
//! data format 1.1 into a [`Document`]. Each [`Airspace`] of the document has
//! its vertical limits and its boundary as [`Polygon`]s of
//! `(longitude, latitude)` pairs.
//!
//! A document is decoded as a whole: either every airspace is parsed or an
//! [`Error`] is returned.
//!
//! # Features
//!
//! - `geo`: converts a [`Polygon`] into a `geo::Polygon`.
//! - `serialize`: implements serde's `Serialize` and `Deserialize` for the
//!   decoded records.
//!
//! [openAIP]: https://www.openaip.net/

#![cfg_attr(docsrs, feature(doc_cfg))]

mod airspace;
mod error;
#[cfg(feature = "geo")]
mod geometry;
mod parser;
mod xml;

pub use airspace::{Airspace, Altitude, AltitudeLimit, Document, Polygon};
pub use error::Error;
pub use parser::{decode, from_slice, from_str, SUPPORTED_DATA_FORMAT};
