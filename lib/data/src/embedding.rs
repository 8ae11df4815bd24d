//! Precomputed 2-D embedding of the catalog
//!
//! Each beer has a point in a 2-D projection computed offline. The engine
//! only loads and serves the coordinates; producing them is out of scope.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use brewrec_core::{BeerId, Catalog, Error, Result};

/// Margin added around a selection when fitting the viewport
const VIEW_MARGIN: f32 = 0.1;

/// One beer's position in the 2-D projection.
///
/// The source CSV uses pandas' default column names for the two
/// coordinates, hence the `0`/`1` renames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    #[serde(alias = "num", alias = "Number")]
    pub id: BeerId,
    #[serde(rename = "0")]
    pub x: f32,
    #[serde(rename = "1")]
    pub y: f32,
}

/// Axis-aligned bounds of a selection, with margin applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

/// All embedding points, keyed by beer id, read-only after load.
#[derive(Debug)]
pub struct EmbeddingTable {
    points: Vec<EmbeddingPoint>,
    index: AHashMap<BeerId, usize>,
}

impl EmbeddingTable {
    /// Build a table, checking that every point refers to a catalog record.
    pub fn new(points: Vec<EmbeddingPoint>, catalog: &Catalog) -> Result<Self> {
        let mut index = AHashMap::with_capacity(points.len());
        for (pos, point) in points.iter().enumerate() {
            if !catalog.contains(point.id) {
                return Err(Error::MalformedRecord(format!(
                    "embedding refers to unknown beer {}",
                    point.id
                )));
            }
            if index.insert(point.id, pos).is_some() {
                return Err(Error::DuplicateId(point.id));
            }
        }
        Ok(Self { points, index })
    }

    /// Read the embedding CSV and validate it against the catalog.
    pub fn load<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?;

        let mut points = Vec::new();
        for (row, result) in reader.deserialize::<EmbeddingPoint>().enumerate() {
            let point = result
                .map_err(|e| Error::MalformedRecord(format!("line {}: {e}", row + 2)))?;
            points.push(point);
        }

        let table = Self::new(points, catalog)?;
        info!(
            "Loaded {} embedding points from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[EmbeddingPoint] {
        &self.points
    }

    #[inline]
    pub fn get(&self, id: BeerId) -> Option<&EmbeddingPoint> {
        self.index.get(&id).map(|&pos| &self.points[pos])
    }

    /// Viewport bounds covering the given beers, with [`VIEW_MARGIN`] on
    /// each side. `None` when no given id has a point, which callers treat
    /// as "show everything".
    pub fn bounds<I>(&self, ids: I) -> Option<MapBounds>
    where
        I: IntoIterator<Item = BeerId>,
    {
        let mut bounds: Option<MapBounds> = None;
        for id in ids {
            let Some(point) = self.get(id) else { continue };
            bounds = Some(match bounds {
                None => MapBounds {
                    x_min: point.x,
                    x_max: point.x,
                    y_min: point.y,
                    y_max: point.y,
                },
                Some(b) => MapBounds {
                    x_min: b.x_min.min(point.x),
                    x_max: b.x_max.max(point.x),
                    y_min: b.y_min.min(point.y),
                    y_max: b.y_max.max(point.y),
                },
            });
        }
        bounds.map(|b| MapBounds {
            x_min: b.x_min - VIEW_MARGIN,
            x_max: b.x_max + VIEW_MARGIN,
            y_min: b.y_min - VIEW_MARGIN,
            y_max: b.y_max + VIEW_MARGIN,
        })
    }
}
