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

use std::io::BufRead;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::airspace::*;
use crate::error::Error;
use crate::xml;

/// The only `DATAFORMAT` of an openAIP document this parser accepts.
pub const SUPPORTED_DATA_FORMAT: &str = "1.1";

/// Decodes an openAIP document from a buffered reader.
///
/// The reader is consumed until the end of the root element. It is owned by
/// the caller which is also responsible for closing the underlying source.
///
/// # Errors
///
/// Fails if the XML is malformed, a number or coordinate list can't be
/// parsed, or the document's `DATAFORMAT` isn't [`SUPPORTED_DATA_FORMAT`].
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let file = File::open("de_asp.aip").unwrap();
/// let doc = openaip::decode(BufReader::new(file)).unwrap();
///
/// for airspace in &doc {
///     println!("{airspace}");
/// }
/// ```
pub fn decode<R: BufRead>(reader: R) -> Result<Document, Error> {
    let x: xml::OpenAipXml = quick_xml::de::from_reader(reader)?;
    Document::try_from(x)
}

/// Decodes an openAIP document from a string.
///
/// # Examples
///
/// ```
/// let doc = openaip::from_str(
///     r#"<OPENAIP VERSION="1" DATAFORMAT="1.1">
///          <AIRSPACES>
///            <ASP CATEGORY="CTR">
///              <ID>42</ID>
///              <NAME>DONLON CTR</NAME>
///              <ALTLIMIT_TOP REFERENCE="MSL"><ALT UNIT="F">2500</ALT></ALTLIMIT_TOP>
///              <ALTLIMIT_BOTTOM REFERENCE="GND"><ALT UNIT="F">0</ALT></ALTLIMIT_BOTTOM>
///              <GEOMETRY>
///                <POLYGON>10.0 52.0, 10.5 52.0, 10.5 52.5, 10.0 52.0</POLYGON>
///              </GEOMETRY>
///            </ASP>
///          </AIRSPACES>
///        </OPENAIP>"#,
/// )
/// .unwrap();
///
/// let ctr = doc.find(42).unwrap();
/// assert_eq!(ctr.name, "DONLON CTR");
/// assert_eq!(ctr.polygons[0].coordinates[1], (10.5, 52.0));
/// ```
pub fn from_str(s: &str) -> Result<Document, Error> {
    let x: xml::OpenAipXml = quick_xml::de::from_str(s)?;
    Document::try_from(x)
}

/// Decodes an openAIP document from UTF-8 encoded bytes.
pub fn from_slice(data: &[u8]) -> Result<Document, Error> {
    from_str(std::str::from_utf8(data)?)
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}

/// Parses a number of the `field`, ignoring surrounding whitespace.
fn parse_number<T: FromStr>(field: &'static str, text: &str) -> Result<T, Error> {
    text.trim().parse().map_err(|_| Error::InvalidValue {
        field,
        value: text.to_string(),
    })
}

/// Parses a single `"lon lat"` token of a polygon.
fn parse_coordinate(token: &str) -> Result<(f64, f64), Error> {
    let fields: Vec<&str> = token.split_whitespace().collect();

    match fields.as_slice() {
        [lon, lat] => Ok((
            parse_number("POLYGON", lon)?,
            parse_number("POLYGON", lat)?,
        )),
        _ => Err(Error::InvalidCoordinate {
            token: token.to_string(),
            fields: fields.len(),
        }),
    }
}

/// Parses a `"lon lat, lon lat, ..."` coordinate list.
fn parse_coordinates(text: &str) -> Result<Vec<(f64, f64)>, Error> {
    let tokens: Vec<&str> = text.split(',').collect();

    if tokens.len() < 3 {
        return Err(Error::InsufficientCoordinates {
            count: tokens.len(),
        });
    }

    tokens.into_iter().map(parse_coordinate).collect()
}

impl Polygon {
    /// Appends the coordinates of a `"lon lat, lon lat, ..."` list.
    ///
    /// Existing coordinates are kept. If the text can't be parsed, the
    /// polygon is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use openaip::Polygon;
    ///
    /// let mut polygon = Polygon::default();
    /// polygon.extend_from_text("1.0 2.0, 3.0 4.0, 5.0 6.0").unwrap();
    /// polygon.extend_from_text("7.0 8.0, 9.0 10.0, 1.0 2.0").unwrap();
    ///
    /// assert_eq!(polygon.len(), 6);
    /// assert_eq!(polygon.coordinates[3], (7.0, 8.0));
    /// ```
    pub fn extend_from_text(&mut self, text: &str) -> Result<(), Error> {
        let coordinates = parse_coordinates(text)?;
        trace!("parsed polygon with {} coordinates", coordinates.len());
        self.coordinates.extend(coordinates);
        Ok(())
    }
}

impl FromStr for Polygon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut polygon = Polygon::default();
        polygon.extend_from_text(s)?;
        Ok(polygon)
    }
}

/// Parses the numeric text of an altitude. The unit is left empty.
impl FromStr for Altitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Altitude {
            unit: String::new(),
            value: parse_number("ALT", s)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to public types
// ---------------------------------------------------------------------------

impl TryFrom<xml::AltXml> for Altitude {
    type Error = Error;

    fn try_from(x: xml::AltXml) -> Result<Self, Self::Error> {
        Ok(Altitude {
            value: parse_number("ALT", &x.value)?,
            unit: x.unit,
        })
    }
}

impl TryFrom<xml::AltLimitXml> for AltitudeLimit {
    type Error = Error;

    fn try_from(x: xml::AltLimitXml) -> Result<Self, Self::Error> {
        Ok(AltitudeLimit {
            reference: x.reference,
            value: x.alt.map(Altitude::try_from).transpose()?.unwrap_or_default(),
        })
    }
}

impl TryFrom<xml::PolygonXml> for Polygon {
    type Error = Error;

    fn try_from(x: xml::PolygonXml) -> Result<Self, Self::Error> {
        x.coordinates.parse()
    }
}

/// Converts an optional limit, where an absent element is the default limit.
fn altitude_limit(x: Option<xml::AltLimitXml>) -> Result<AltitudeLimit, Error> {
    Ok(x.map(AltitudeLimit::try_from)
        .transpose()?
        .unwrap_or_default())
}

impl TryFrom<xml::AirspaceXml> for Airspace {
    type Error = Error;

    fn try_from(x: xml::AirspaceXml) -> Result<Self, Self::Error> {
        // An empty ID reads as 0, like an absent one.
        let id = x
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| parse_number("ID", id))
            .transpose()?
            .unwrap_or_default();

        let polygons = x
            .geometry
            .into_iter()
            .flat_map(|geometry| geometry.polygons)
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        trace!("parsed airspace {id} {:?}", x.name);

        Ok(Airspace {
            category: x.category,
            version: x.version,
            id,
            country: x.country,
            name: x.name,
            altitude_top: altitude_limit(x.alt_limit_top)?,
            altitude_bottom: altitude_limit(x.alt_limit_bottom)?,
            polygons,
        })
    }
}

impl TryFrom<xml::OpenAipXml> for Document {
    type Error = Error;

    fn try_from(x: xml::OpenAipXml) -> Result<Self, Self::Error> {
        let airspaces = x
            .airspaces
            .into_iter()
            .flat_map(|airspaces| airspaces.asp)
            .map(Airspace::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        // The format is checked only once the whole document is parsed.
        if x.data_format != SUPPORTED_DATA_FORMAT {
            warn!("rejecting openAIP document with data format {:?}", x.data_format);
            return Err(Error::UnsupportedDataFormat(x.data_format));
        }

        debug!(
            "parsed openAIP document {} with {} airspaces",
            x.version,
            airspaces.len()
        );

        Ok(Document {
            version: x.version,
            data_format: x.data_format,
            airspaces,
        })
    }
}
