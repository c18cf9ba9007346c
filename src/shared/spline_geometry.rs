//! Reine Geometrie-Funktionen für Catmull-Rom-Splines über Kartenpositionen.
//!
//! Interpoliert planar in der (lng, lat)-Ebene; für Kurs-Ausdehnungen
//! von wenigen hundert Metern ist der Fehler vernachlässigbar.

use crate::core::Position;
use glam::DVec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Berechnet eine dichte Punktliste entlang einer Catmull-Rom-Spline durch `points`.
///
/// Für Rand-Segmente werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn catmull_rom_chain(points: &[Position], samples_per_segment: usize) -> Vec<Position> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }
    let pts: Vec<DVec2> = points.iter().map(|p| p.to_plane()).collect();

    if pts.len() == 2 {
        // Gerade Linie, kein Spline nötig
        return (0..=samples_per_segment)
            .map(|i| {
                let t = i as f64 / samples_per_segment as f64;
                Position::from_plane(pts[0].lerp(pts[1], t))
            })
            .collect();
    }

    let n = pts.len();
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        let p0 = if seg == 0 {
            2.0 * pts[0] - pts[1]
        } else {
            pts[seg - 1]
        };
        let p1 = pts[seg];
        let p2 = pts[seg + 1];
        let p3 = if seg + 2 < n {
            pts[seg + 2]
        } else {
            2.0 * pts[n - 1] - pts[n - 2]
        };

        let steps = if seg == n - 2 {
            samples_per_segment + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples_per_segment
        };

        for i in 0..steps {
            let t = i as f64 / samples_per_segment as f64;
            result.push(Position::from_plane(catmull_rom_point(p0, p1, p2, p3, t)));
        }
    }

    result
}
