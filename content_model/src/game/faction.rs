//! Faction definitions.

use serde::{Deserialize, Serialize};

/// Icon shown on a faction card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactionIcon {
    Leaf,
    Cpu,
    Skull,
}

/// One of the playable factions described on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,

    // Colour tokens, as stylesheet class names
    /// Gradient, e.g. `from-emerald-600 to-emerald-800`.
    pub color: String,
    pub border_color: String,
    pub text_color: String,
    pub bg_color: String,

    pub image: String,
    pub icon_name: FactionIcon,
}
