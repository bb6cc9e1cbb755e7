//! Site copy: the singleton `GameData` record and its parts.

mod faction;

pub use faction::*;

use serde::{Deserialize, Serialize};

use crate::defaults::default_game_data;

/// Game server availability shown on the landing page and the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
    #[default]
    Maintenance,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Online => "online",
            ServerStatus::Offline => "offline",
            ServerStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    /// Image URL or `data:` URI.
    pub image: String,
}

impl FeatureItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

/// Editable fields of a [`FeatureItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureField {
    Title,
    Description,
    Image,
}

/// The complete editable copy of the site.
///
/// Exactly one record exists. The container-level `serde(default)` means a stored record
/// missing some fields is backfilled from [`default_game_data`] when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameData {
    pub name: String,
    pub slogan: String,
    pub tagline: String,
    pub description: String,
    pub full_description: String,
    pub features: Vec<FeatureItem>,
    pub factions: Vec<Faction>,
    /// Screenshot URLs or `data:` URIs, in display order.
    pub screenshots: Vec<String>,
    pub server_status: ServerStatus,
}

impl Default for GameData {
    fn default() -> Self {
        default_game_data()
    }
}

impl GameData {
    /// Append a screenshot to the gallery.
    pub fn add_screenshot(&mut self, image: impl Into<String>) {
        self.screenshots.push(image.into());
    }

    /// Remove the screenshot at `index`, if there is one.
    pub fn remove_screenshot(&mut self, index: usize) -> Option<String> {
        if index < self.screenshots.len() {
            Some(self.screenshots.remove(index))
        } else {
            None
        }
    }

    /// Overwrite one field of the feature at `index`. Returns false if no such feature.
    pub fn update_feature(
        &mut self,
        index: usize,
        field: FeatureField,
        value: impl Into<String>,
    ) -> bool {
        let Some(feature) = self.features.get_mut(index) else {
            return false;
        };
        let value = value.into();
        match field {
            FeatureField::Title => feature.title = value,
            FeatureField::Description => feature.description = value,
            FeatureField::Image => feature.image = value,
        }
        true
    }

    /// Get a faction by its id.
    pub fn faction(&self, id: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }
}

/// A partial update of [`GameData`]. Only the fields set to `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDataPatch {
    pub name: Option<String>,
    pub slogan: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub features: Option<Vec<FeatureItem>>,
    pub factions: Option<Vec<Faction>>,
    pub screenshots: Option<Vec<String>>,
    pub server_status: Option<ServerStatus>,
}

impl GameDataPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server_status(mut self, status: ServerStatus) -> Self {
        self.server_status = Some(status);
        self
    }

    pub fn with_screenshots(mut self, screenshots: Vec<String>) -> Self {
        self.screenshots = Some(screenshots);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the set fields over `target`.
    pub fn apply_to(self, target: &mut GameData) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(slogan) = self.slogan {
            target.slogan = slogan;
        }
        if let Some(tagline) = self.tagline {
            target.tagline = tagline;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(full_description) = self.full_description {
            target.full_description = full_description;
        }
        if let Some(features) = self.features {
            target.features = features;
        }
        if let Some(factions) = self.factions {
            target.factions = factions;
        }
        if let Some(screenshots) = self.screenshots {
            target.screenshots = screenshots;
        }
        if let Some(server_status) = self.server_status {
            target.server_status = server_status;
        }
    }
}
