//! Native geometry types.

/// Geographic coordinate.
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Coordinate as `[lng, lat]` GeoJSON position.
    pub fn to_position(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<[f64; 2]> for LatLng {
    /// Convert from a `[lat, lng]` pair.
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

/// Polygon with an exterior ring and optional holes.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Polygon {
    pub exterior: Vec<LatLng>,
    pub holes: Vec<Vec<LatLng>>,
}

impl Polygon {
    pub fn new(exterior: Vec<LatLng>, holes: Vec<Vec<LatLng>>) -> Self {
        Self { exterior, holes }
    }

    /// Iterate over all rings, starting with the exterior.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<LatLng>> {
        std::iter::once(&self.exterior).chain(&self.holes)
    }
}

/// Native geometry.
#[derive(PartialEq, Clone, Debug)]
pub enum Geometry {
    Point(LatLng),
    LineString(Vec<LatLng>),
    Polygon(Polygon),
    MultiPoint(Vec<LatLng>),
    MultiLineString(Vec<Vec<LatLng>>),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// GeoJSON name of the geometry type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::MultiLineString(_) => "MultiLineString",
            Self::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_order() {
        let point = LatLng::from([27.7, 85.3]);
        assert_eq!(point, LatLng::new(27.7, 85.3));
        assert_eq!(point.to_position(), [85.3, 27.7]);
    }

    #[test]
    fn polygon_rings() {
        let exterior = vec![LatLng::new(0., 0.), LatLng::new(0., 1.), LatLng::new(1., 1.)];
        let hole = vec![LatLng::new(0.2, 0.2), LatLng::new(0.2, 0.4), LatLng::new(0.4, 0.4)];
        let polygon = Polygon::new(exterior.clone(), vec![hole.clone()]);

        let rings: Vec<_> = polygon.rings().collect();
        assert_eq!(rings, [&exterior, &hole]);
    }
}
