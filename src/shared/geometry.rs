//! Reine Geo-Funktionen: Großkreis-Distanz, Polyline-Länge, Schwerpunkt, Bounds.
//!
//! Layer-neutral wie `spline_geometry`; keine Abhängigkeit auf `app`.

use super::spline_geometry::catmull_rom_chain;
use crate::core::Position;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Großkreis-Distanz zwischen zwei Koordinaten (Haversine) in Metern.
///
/// Symmetrisch; identische Punkte ergeben exakt 0.
pub fn haversine_distance_m(a: Position, b: Position) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rundungsfehler können h minimal über 1 schieben
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_M * c
}

/// Summierte Großkreis-Länge einer offenen Polyline.
pub fn polyline_length_m(points: &[Position]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance_m(w[0], w[1]))
        .sum()
}

/// Umfang eines geschlossenen Rings (letzter Punkt wird implizit mit dem ersten verbunden).
pub fn ring_length_m(points: &[Position]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 2 => {
            polyline_length_m(points) + haversine_distance_m(*last, *first)
        }
        _ => polyline_length_m(points),
    }
}

/// Arithmetischer Mittelwert der Eckpunkte. `None` für leere Eingabe.
///
/// Geodätisch nicht exakt, für Ausdehnungen < 1 km ausreichend.
pub fn polygon_centroid(points: &[Position]) -> Option<Position> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(Position::new(lat_sum / n, lng_sum / n))
}

/// Achsparalleles Rechteck in Lat/Lng.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min: Position,
    pub max: Position,
}

impl GeoBounds {
    /// Rechteck, das genau einen Punkt umfasst.
    pub fn from_point(p: Position) -> Self {
        Self { min: p, max: p }
    }

    /// Erweitert das Rechteck um einen Punkt.
    pub fn extend(&mut self, p: Position) {
        self.min.lat = self.min.lat.min(p.lat);
        self.min.lng = self.min.lng.min(p.lng);
        self.max.lat = self.max.lat.max(p.lat);
        self.max.lng = self.max.lng.max(p.lng);
    }

    /// Prüft ob ein Punkt innerhalb liegt (Rand inklusive).
    pub fn contains(&self, p: Position) -> bool {
        (self.min.lat..=self.max.lat).contains(&p.lat)
            && (self.min.lng..=self.max.lng).contains(&p.lng)
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> Position {
        Position::new(
            (self.min.lat + self.max.lat) / 2.0,
            (self.min.lng + self.max.lng) / 2.0,
        )
    }
}

/// Bounding-Box aller Punkte. `None` für leere Eingabe.
pub fn bounds<'a, I>(points: I) -> Option<GeoBounds>
where
    I: IntoIterator<Item = &'a Position>,
{
    let mut iter = points.into_iter();
    let mut result = GeoBounds::from_point(*iter.next()?);
    for p in iter {
        result.extend(*p);
    }
    Some(result)
}

/// Länge eines per Catmull-Rom geglätteten Pfads in Metern.
///
/// Nur für Anzeige/Export; Kern-Invarianten hängen nie davon ab.
/// Weniger als zwei Punkte ergeben 0.
pub fn curved_path_length_m(points: &[Position], samples_per_segment: usize) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let dense = catmull_rom_chain(points, samples_per_segment.max(1));
    polyline_length_m(&dense)
}
