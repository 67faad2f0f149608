//! Area-of-interest polygon and its axis-aligned bounding box.

use wp_core::{COORD_EPSILON_DEG, GeoPoint, PlanError, PlanResult};

/// Minimum number of distinct vertices for a survey area.
pub const MIN_VERTICES: usize = 3;

/// A validated area-of-interest outline.
///
/// The ring may be open or explicitly closed (last ≈ first within
/// [`COORD_EPSILON_DEG`]).  Only the
/// vertex set matters to the planner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Validate and wrap `vertices`.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidGeometry`] if there are fewer than
    /// [`MIN_VERTICES`] vertices (a closing duplicate does not count) or any
    /// vertex is non-finite / out of range.
    pub fn new(vertices: Vec<GeoPoint>) -> PlanResult<Self> {
        for v in &vertices {
            v.validate()?;
        }

        let closed = match (vertices.first(), vertices.last()) {
            (Some(&first), Some(&last)) if vertices.len() > 1 => {
                first.approx_eq(last, COORD_EPSILON_DEG)
            }
            _ => false,
        };
        let distinct = if closed { vertices.len() - 1 } else { vertices.len() };
        if distinct < MIN_VERTICES {
            return Err(PlanError::InvalidGeometry(format!(
                "polygon needs at least {MIN_VERTICES} vertices, got {distinct}"
            )));
        }

        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_polygon(self)
    }
}

/// Axis-aligned latitude/longitude rectangle enclosing a polygon.
///
/// Invariant: `min_lat <= max_lat` and `min_lon <= max_lon`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Reduce an arbitrary vertex list to its bounding box.
    ///
    /// The vertices go through the same validation as [`Polygon::new`].
    pub fn extract(vertices: &[GeoPoint]) -> PlanResult<Self> {
        Ok(Self::from_polygon(&Polygon::new(vertices.to_vec())?))
    }

    pub fn from_polygon(polygon: &Polygon) -> Self {
        let mut bbox = BoundingBox {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        };
        for v in polygon.vertices() {
            bbox.min_lat = bbox.min_lat.min(v.latitude);
            bbox.max_lat = bbox.max_lat.max(v.latitude);
            bbox.min_lon = bbox.min_lon.min(v.longitude);
            bbox.max_lon = bbox.max_lon.max(v.longitude);
        }
        bbox
    }

    /// The closed 5-point ring, in the fixed order
    /// (min-lat, max-lon) → (max-lat, max-lon) → (max-lat, min-lon)
    /// → (min-lat, min-lon) → (min-lat, max-lon).
    pub fn corners(&self) -> [GeoPoint; 5] {
        let south_east = self.south_east();
        [
            south_east,
            GeoPoint::new(self.max_lat, self.max_lon),
            GeoPoint::new(self.max_lat, self.min_lon),
            GeoPoint::new(self.min_lat, self.min_lon),
            south_east,
        ]
    }

    /// The (min-lat, max-lon) corner every sweep starts from.
    #[inline]
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.max_lon)
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.latitude)
            && (self.min_lon..=self.max_lon).contains(&p.longitude)
    }

    /// East-west extent along the southern edge, in metres.
    pub fn width_m(&self) -> f64 {
        GeoPoint::new(self.min_lat, self.min_lon).distance_m(self.south_east())
    }

    /// North-south extent along the eastern edge, in metres.
    pub fn height_m(&self) -> f64 {
        self.south_east().distance_m(GeoPoint::new(self.max_lat, self.max_lon))
    }
}
