//! Geografische Position (WGS-84, Grad).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Eine Koordinate auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl Position {
    /// Erstellt eine neue Position.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Projiziert die Position in die (lng, lat)-Ebene fuer planare Interpolation.
    ///
    /// Nur fuer kleine Ausdehnungen (< wenige km) sinnvoll.
    pub fn to_plane(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Gegenstück zu [`Position::to_plane`].
    pub fn from_plane(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }

    /// Prüft ob beide Komponenten endliche Zahlen im gültigen Wertebereich sind.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for Position {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}
