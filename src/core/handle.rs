//! Handle-Typen der Kaliper-Messung: Schlüssel, Flags und die feste
//! Fünfer-Struktur aus Langachse, Kurzachse und Label-Anker.

use glam::Vec2;

use super::Segment;

/// Schlüssel der fünf Handles einer Messung.
///
/// Die Geometrie-Indizes (0–3) sind für die Lebensdauer einer Messung
/// permanent; Handles werden nie umnummeriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKey {
    /// Startpunkt der Langachse (Index 0)
    Start,
    /// Endpunkt der Langachse (Index 1)
    End,
    /// Erster Endpunkt der Kurzachse (Index 2)
    PerpendicularStart,
    /// Zweiter Endpunkt der Kurzachse (Index 3)
    PerpendicularEnd,
    /// Frei positionierbarer Label-Anker (kein Geometrie-Index)
    Label,
}

impl HandleKey {
    /// Die vier Achsen-Handles in Index-Reihenfolge.
    pub const AXIS_KEYS: [HandleKey; 4] = [
        HandleKey::Start,
        HandleKey::End,
        HandleKey::PerpendicularStart,
        HandleKey::PerpendicularEnd,
    ];

    /// Permanenter Geometrie-Index; `None` für das Label.
    pub fn geometry_index(&self) -> Option<usize> {
        match self {
            HandleKey::Start => Some(0),
            HandleKey::End => Some(1),
            HandleKey::PerpendicularStart => Some(2),
            HandleKey::PerpendicularEnd => Some(3),
            HandleKey::Label => None,
        }
    }

    /// Gegenüberliegendes Handle derselben Achse; `None` für das Label.
    pub fn opposite(&self) -> Option<HandleKey> {
        match self {
            HandleKey::Start => Some(HandleKey::End),
            HandleKey::End => Some(HandleKey::Start),
            HandleKey::PerpendicularStart => Some(HandleKey::PerpendicularEnd),
            HandleKey::PerpendicularEnd => Some(HandleKey::PerpendicularStart),
            HandleKey::Label => None,
        }
    }
}

/// Einzelnes Handle mit Position und Interaktions-Flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in Bild-Pixel-Koordinaten
    pub position: Vec2,
    /// Messung/Handle ist im Fokus des Zeigers
    pub active: bool,
    /// Zeiger schwebt über diesem Handle
    pub hover: bool,
    /// Handle wurde beim letzten Drag-Ende ausgewählt
    pub selected: bool,
    /// Handle wird gerade per Drag verschoben
    pub moving: bool,
    /// Nur auf `PerpendicularStart` relevant: Kurzachse folgt der
    /// Langachse automatisch, solange sie nie manuell verschoben wurde
    pub locked: bool,
    /// Handle darf außerhalb der Bildgrenzen liegen (Label-Anker)
    pub allowed_outside_image: bool,
}

impl Handle {
    /// Erstellt ein Handle an `position` mit zurückgesetzten Flags.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            active: false,
            hover: false,
            selected: false,
            moving: false,
            locked: false,
            allowed_outside_image: false,
        }
    }

    /// Setzt alle Interaktions-Flags zurück (Position und `locked` bleiben).
    pub fn clear_interaction_flags(&mut self) {
        self.active = false;
        self.hover = false;
        self.selected = false;
        self.moving = false;
    }
}

/// Die fünf Handles einer Messung als feste Struktur.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    pub start: Handle,
    pub end: Handle,
    pub perpendicular_start: Handle,
    pub perpendicular_end: Handle,
    pub label: Handle,
}

impl HandleSet {
    /// Erstellt alle Handles am Ursprungspunkt einer neuen Messung.
    ///
    /// Die Kurzachse startet `locked` (folgt der Langachse automatisch),
    /// der Label-Anker darf außerhalb des Bildes liegen.
    pub fn from_origin(origin: Vec2) -> Self {
        let mut perpendicular_start = Handle::at(origin);
        perpendicular_start.locked = true;
        let mut label = Handle::at(origin);
        label.allowed_outside_image = true;

        Self {
            start: Handle::at(origin),
            end: Handle::at(origin),
            perpendicular_start,
            perpendicular_end: Handle::at(origin),
            label,
        }
    }

    /// Gibt eine Referenz auf das Handle zum Schlüssel zurück.
    pub fn get(&self, key: HandleKey) -> &Handle {
        match key {
            HandleKey::Start => &self.start,
            HandleKey::End => &self.end,
            HandleKey::PerpendicularStart => &self.perpendicular_start,
            HandleKey::PerpendicularEnd => &self.perpendicular_end,
            HandleKey::Label => &self.label,
        }
    }

    /// Gibt eine mutable Referenz auf das Handle zum Schlüssel zurück.
    pub fn get_mut(&mut self, key: HandleKey) -> &mut Handle {
        match key {
            HandleKey::Start => &mut self.start,
            HandleKey::End => &mut self.end,
            HandleKey::PerpendicularStart => &mut self.perpendicular_start,
            HandleKey::PerpendicularEnd => &mut self.perpendicular_end,
            HandleKey::Label => &mut self.label,
        }
    }

    /// Iteriert über alle fünf Handles mit ihren Schlüsseln.
    pub fn iter(&self) -> impl Iterator<Item = (HandleKey, &Handle)> {
        [
            (HandleKey::Start, &self.start),
            (HandleKey::End, &self.end),
            (HandleKey::PerpendicularStart, &self.perpendicular_start),
            (HandleKey::PerpendicularEnd, &self.perpendicular_end),
            (HandleKey::Label, &self.label),
        ]
        .into_iter()
    }

    /// Langachse als Segment (`start` → `end`).
    pub fn long_axis(&self) -> Segment {
        Segment::new(self.start.position, self.end.position)
    }

    /// Kurzachse als Segment (`perpendicular_start` → `perpendicular_end`).
    pub fn short_axis(&self) -> Segment {
        Segment::new(
            self.perpendicular_start.position,
            self.perpendicular_end.position,
        )
    }

    /// Verschiebt alle Handles (inklusive Label) um `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.start.position += delta;
        self.end.position += delta;
        self.perpendicular_start.position += delta;
        self.perpendicular_end.position += delta;
        self.label.position += delta;
    }

    /// Gibt `true` zurück wenn alle Positionen endliche Koordinaten haben.
    pub fn all_finite(&self) -> bool {
        self.iter().all(|(_, handle)| handle.position.is_finite())
    }
}
