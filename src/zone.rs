//! Drop zones and the registry that owns them.
//!
//! A [`DropZone`] is a passive target: a name, a position and a query layer.
//! Draggables never hold a zone directly. They keep a [`ZoneId`] and look the
//! zone up in the [`ZoneRegistry`] when they need it, so a removed zone simply
//! stops resolving.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Stable handle to a zone in a [`ZoneRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub u64);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spatial query layer an object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer(pub u8);

impl Layer {
    pub const DEFAULT: Layer = Layer(0);
    pub const DRAGGABLE: Layer = Layer(8);
    pub const DROP_ZONE: Layer = Layer(9);

    #[inline]
    pub fn mask(self) -> LayerMask {
        LayerMask(1 << (self.0 & 31))
    }
}

/// Set of layers a spatial query is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    #[inline]
    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.mask().0 != 0
    }
}

/// A named, positioned target a draggable can settle onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropZone {
    pub id: ZoneId,
    pub name: String,
    /// Same space as the draggables that target it (overlay zones use x/y).
    pub position: Vec3,
    pub layer: Layer,
}

impl DropZone {
    /// Called when a pointer release lands on this zone.
    pub fn acknowledge_drop(&self, draggable: &str) {
        info!(zone = %self.name, draggable, "Object dropped on zone");
    }
}

/// Arena of drop zones keyed by [`ZoneId`].
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: HashMap<ZoneId, DropZone>,
    next_id: u64,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone on the drop-zone layer.
    pub fn insert(&mut self, name: impl Into<String>, position: Vec3) -> ZoneId {
        self.next_id += 1;
        let id = ZoneId(self.next_id);
        self.zones.insert(
            id,
            DropZone {
                id,
                name: name.into(),
                position,
                layer: Layer::DROP_ZONE,
            },
        );
        id
    }

    pub fn remove(&mut self, id: ZoneId) -> Option<DropZone> {
        self.zones.remove(&id)
    }

    pub fn get(&self, id: ZoneId) -> Option<&DropZone> {
        self.zones.get(&id)
    }

    /// First zone with this name, lowest id wins on duplicates.
    pub fn find_by_name(&self, name: &str) -> Option<&DropZone> {
        self.zones
            .values()
            .filter(|zone| zone.name == name)
            .min_by_key(|zone| zone.id)
    }

    pub fn contains(&self, id: ZoneId) -> bool {
        self.zones.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DropZone> {
        self.zones.values()
    }
}
