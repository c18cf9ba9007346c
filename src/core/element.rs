//! Kurs-Elemente: Tee, Korb, OB-Zonen, Hazards und Mandatories.
//!
//! Der Element-Typ steckt in der Variante von [`ElementKind`] und kann sich nach
//! der Erstellung nicht mehr ändern. Nur Position/Pfad und Properties sind mutierbar.

use super::Position;
use crate::shared::geometry;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimale Punktanzahl eines geschlossenen Polygons (OB-Zone, Hazard).
pub const MIN_PATH_POINTS: usize = 3;

/// Session-weit eindeutige, unveränderliche Element-ID.
///
/// Der Inhalt ist opak: neue Elemente bekommen eine UUID v4, importierte
/// Kurse dürfen beliebige nicht-leere Zeichenketten mitbringen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Erzeugt eine neue zufällige ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Die ID als Zeichenkette.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leere IDs sind beim Import unzulässig.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ElementId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element-Typ (ohne Geometrie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    /// Abwurfposition
    Tee,
    /// Ziel (Korb)
    Basket,
    /// Out-of-Bounds-Zone (Polygon)
    ObZone,
    /// Hindernis (Polygon)
    Hazard,
    /// Pflicht-Marker mit Richtung
    Mandatory,
}

impl ElementType {
    /// Punkt-Elemente tragen genau eine Position.
    pub fn is_point_kind(self) -> bool {
        matches!(
            self,
            ElementType::Tee | ElementType::Basket | ElementType::Mandatory
        )
    }

    /// Pfad-Elemente tragen ein geschlossenes Polygon.
    pub fn is_path_kind(self) -> bool {
        !self.is_point_kind()
    }

    /// Anzeigename für UI und Logs.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Tee => "Tee",
            ElementType::Basket => "Basket",
            ElementType::ObZone => "OB-Zone",
            ElementType::Hazard => "Hazard",
            ElementType::Mandatory => "Mandatory",
        }
    }
}

/// Typ plus typ-spezifische Geometrie.
///
/// Serialisiert intern getaggt (`"type": "ob-zone"`), damit die Form im
/// persistierten JSON `{ type, position? | path? }` entspricht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    /// Tee-Position
    Tee { position: Position },
    /// Korb-Position
    Basket { position: Position },
    /// Mandatory-Position (Richtung über `ElementProperties::angle`)
    Mandatory { position: Position },
    /// OB-Zone als Polygon-Ring
    ObZone { path: Vec<Position> },
    /// Hazard als Polygon-Ring
    Hazard { path: Vec<Position> },
}

impl ElementKind {
    /// Baut die Geometrie für einen Punkt-Typ. `None` für Pfad-Typen.
    pub fn point(element_type: ElementType, position: Position) -> Option<Self> {
        match element_type {
            ElementType::Tee => Some(ElementKind::Tee { position }),
            ElementType::Basket => Some(ElementKind::Basket { position }),
            ElementType::Mandatory => Some(ElementKind::Mandatory { position }),
            ElementType::ObZone | ElementType::Hazard => None,
        }
    }

    /// Baut die Geometrie für einen Pfad-Typ. `None` für Punkt-Typen.
    pub fn polygon(element_type: ElementType, path: Vec<Position>) -> Option<Self> {
        match element_type {
            ElementType::ObZone => Some(ElementKind::ObZone { path }),
            ElementType::Hazard => Some(ElementKind::Hazard { path }),
            ElementType::Tee | ElementType::Basket | ElementType::Mandatory => None,
        }
    }

    /// Gibt den Element-Typ zurück.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Tee { .. } => ElementType::Tee,
            ElementKind::Basket { .. } => ElementType::Basket,
            ElementKind::Mandatory { .. } => ElementType::Mandatory,
            ElementKind::ObZone { .. } => ElementType::ObZone,
            ElementKind::Hazard { .. } => ElementType::Hazard,
        }
    }

    /// Position eines Punkt-Elements.
    pub fn position(&self) -> Option<Position> {
        match self {
            ElementKind::Tee { position }
            | ElementKind::Basket { position }
            | ElementKind::Mandatory { position } => Some(*position),
            ElementKind::ObZone { .. } | ElementKind::Hazard { .. } => None,
        }
    }

    /// Pfad eines Polygon-Elements.
    pub fn path(&self) -> Option<&[Position]> {
        match self {
            ElementKind::ObZone { path } | ElementKind::Hazard { path } => Some(path),
            _ => None,
        }
    }

    /// Prüft die Geometrie-Invarianten (Pfad >= 3 Punkte, gültige Koordinaten).
    pub fn is_valid(&self) -> bool {
        match self {
            ElementKind::Tee { position }
            | ElementKind::Basket { position }
            | ElementKind::Mandatory { position } => position.is_valid(),
            ElementKind::ObZone { path } | ElementKind::Hazard { path } => {
                path.len() >= MIN_PATH_POINTS && path.iter().all(Position::is_valid)
            }
        }
    }
}

/// Kosmetische Eigenschaften eines Elements. Steuern keine Logik.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementProperties {
    pub name: Option<String>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    /// Drehung in Grad (0..360), nur für Mandatories relevant
    pub angle: f64,
}

/// Teil-Update der Properties; `None` = unverändert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertiesPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub angle: Option<f64>,
}

impl ElementProperties {
    /// Übernimmt alle gesetzten Felder aus `patch`.
    pub fn merge(&mut self, patch: &PropertiesPatch) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(color) = &patch.color {
            self.color = Some(color.clone());
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = Some(width);
        }
        if let Some(opacity) = patch.fill_opacity {
            self.fill_opacity = Some(opacity.clamp(0.0, 1.0));
        }
        if let Some(angle) = patch.angle {
            self.angle = normalize_angle(angle);
        }
    }
}

/// Normalisiert einen Winkel in den Bereich `0..360`.
pub fn normalize_angle(degrees: f64) -> f64 {
    if degrees.is_finite() {
        degrees.rem_euclid(360.0)
    } else {
        0.0
    }
}

/// Teil-Update eines Elements (UPDATE_ELEMENT).
///
/// `position` gilt nur für Punkt-Elemente, `path` nur für Pfad-Elemente.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementPatch {
    pub position: Option<Position>,
    pub path: Option<Vec<Position>>,
    pub properties: Option<PropertiesPatch>,
}

impl ElementPatch {
    /// Patch, der nur die Position setzt.
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    /// Patch, der nur den Pfad ersetzt.
    pub fn path(path: Vec<Position>) -> Self {
        Self {
            path: Some(path),
            ..Default::default()
        }
    }

    /// Patch, der nur Properties ändert.
    pub fn properties(properties: PropertiesPatch) -> Self {
        Self {
            properties: Some(properties),
            ..Default::default()
        }
    }
}

/// Grund, warum ein Patch nicht angewendet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchRejection {
    /// Position auf Pfad-Element oder Pfad auf Punkt-Element
    GeometryMismatch,
    /// Neuer Pfad hat weniger als drei Punkte oder ungültige Koordinaten
    InvalidGeometry,
}

/// Ein platziertes oder gezeichnetes Element eines Lochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseElement {
    /// Unveränderliche ID
    pub id: ElementId,
    /// Nummer des besitzenden Lochs
    pub hole_number: u32,
    /// Typ und Geometrie
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Kosmetische Eigenschaften
    #[serde(default)]
    pub properties: ElementProperties,
}

impl CourseElement {
    /// Erstellt ein Element mit neuer ID und Standard-Properties.
    pub fn new(hole_number: u32, kind: ElementKind) -> Self {
        Self {
            id: ElementId::new(),
            hole_number,
            kind,
            properties: ElementProperties::default(),
        }
    }

    /// Punkt-Element an `position`. `None` wenn `element_type` ein Pfad-Typ ist.
    pub fn new_point(hole_number: u32, element_type: ElementType, position: Position) -> Option<Self> {
        ElementKind::point(element_type, position).map(|kind| Self::new(hole_number, kind))
    }

    /// Pfad-Element. `None` bei Punkt-Typ oder weniger als drei Punkten.
    pub fn new_path(hole_number: u32, element_type: ElementType, path: Vec<Position>) -> Option<Self> {
        if path.len() < MIN_PATH_POINTS {
            return None;
        }
        ElementKind::polygon(element_type, path).map(|kind| Self::new(hole_number, kind))
    }

    /// Gibt den Element-Typ zurück.
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Position (nur Punkt-Elemente).
    pub fn position(&self) -> Option<Position> {
        self.kind.position()
    }

    /// Pfad (nur Pfad-Elemente).
    pub fn path(&self) -> Option<&[Position]> {
        self.kind.path()
    }

    /// Schwerpunkt: Position bei Punkt-Elementen, Mittelwert der Ecken bei Polygonen.
    pub fn centroid(&self) -> Option<Position> {
        match self.kind.path() {
            Some(path) => geometry::polygon_centroid(path),
            None => self.kind.position(),
        }
    }

    /// Umfang eines Polygons in Metern (geschlossener Ring). 0 für Punkt-Elemente.
    pub fn perimeter_m(&self) -> f64 {
        self.kind.path().map_or(0.0, geometry::ring_length_m)
    }

    /// Wendet einen Patch an. Der Typ bleibt unverändert.
    ///
    /// Bei Ablehnung bleibt das Element unverändert.
    pub fn apply_patch(&mut self, patch: &ElementPatch) -> Result<(), PatchRejection> {
        if let Some(new_position) = patch.position {
            if !new_position.is_valid() {
                return Err(PatchRejection::InvalidGeometry);
            }
            if self.kind.position().is_none() {
                return Err(PatchRejection::GeometryMismatch);
            }
        }
        if let Some(new_path) = &patch.path {
            if self.kind.path().is_none() {
                return Err(PatchRejection::GeometryMismatch);
            }
            if new_path.len() < MIN_PATH_POINTS || !new_path.iter().all(Position::is_valid) {
                return Err(PatchRejection::InvalidGeometry);
            }
        }

        if let Some(new_position) = patch.position {
            match &mut self.kind {
                ElementKind::Tee { position }
                | ElementKind::Basket { position }
                | ElementKind::Mandatory { position } => *position = new_position,
                ElementKind::ObZone { .. } | ElementKind::Hazard { .. } => {}
            }
        }
        if let Some(new_path) = &patch.path {
            if let ElementKind::ObZone { path } | ElementKind::Hazard { path } = &mut self.kind {
                *path = new_path.clone();
            }
        }
        if let Some(props) = &patch.properties {
            self.properties.merge(props);
        }
        Ok(())
    }
}
