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

use geo::{Coord, LineString};

use crate::Polygon;

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let exterior: LineString<f64> = polygon
            .coordinates
            .iter()
            .map(|&(lon, lat)| Coord { x: lon, y: lat })
            .collect();

        geo::Polygon::new(exterior, vec![])
    }
}

impl Polygon {
    /// Returns the polygon with longitude as x and latitude as y.
    ///
    /// The exterior ring is closed if the coordinates aren't.
    #[cfg_attr(docsrs, doc(cfg(feature = "geo")))]
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        self.into()
    }
}
