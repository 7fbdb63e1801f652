//! Trait catalog - discipline, advantage and flaw definitions served remotely.

use std::fmt;

use serde::{Deserialize, Serialize};

use codex_domain::{Qualifier, TraitKind};

/// A catalog category, as used in the `category` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogCategory {
    Disciplines,
    Advantages,
    Flaws,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 3] = [Self::Disciplines, Self::Advantages, Self::Flaws];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disciplines => "disciplines",
            Self::Advantages => "advantages",
            Self::Flaws => "flaws",
        }
    }

    pub fn trait_kind(&self) -> TraitKind {
        match self {
            Self::Disciplines => TraitKind::Discipline,
            Self::Advantages => TraitKind::Advantage,
            Self::Flaws => TraitKind::Flaw,
        }
    }

    pub fn for_kind(kind: TraitKind) -> Option<Self> {
        match kind {
            TraitKind::Discipline => Some(Self::Disciplines),
            TraitKind::Advantage => Some(Self::Advantages),
            TraitKind::Flaw => Some(Self::Flaws),
            TraitKind::Attribute | TraitKind::Skill => None,
        }
    }
}

impl fmt::Display for CatalogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One trait definition. Only `name` is required for the entry to be usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<u8>,
    #[serde(default)]
    pub is_instanced: bool,
    #[serde(default)]
    pub has_specialties: bool,
}

impl TraitDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Which free-text qualifier to solicit. Instances take precedence.
    pub fn qualifier(&self) -> Option<Qualifier> {
        if self.is_instanced {
            Some(Qualifier::Instance)
        } else if self.has_specialties {
            Some(Qualifier::Specialty)
        } else {
            None
        }
    }
}

/// Body of `GET /api/traits/?category=...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCatalogResponse {
    #[serde(default)]
    pub traits: Vec<TraitDescriptor>,
}

/// The three catalogs the wizard needs, with unusable entries dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitCatalog {
    disciplines: Vec<TraitDescriptor>,
    advantages: Vec<TraitDescriptor>,
    flaws: Vec<TraitDescriptor>,
}

impl TraitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a category's response, keeping service order. Returns how many
    /// entries were skipped for lacking a name.
    pub fn insert(&mut self, category: CatalogCategory, response: TraitCatalogResponse) -> usize {
        let total = response.traits.len();
        let kept: Vec<TraitDescriptor> = response
            .traits
            .into_iter()
            .filter(|descriptor| {
                let usable = !descriptor.name.trim().is_empty();
                if !usable {
                    tracing::warn!(
                        category = %category,
                        id = ?descriptor.id,
                        "Skipping catalog entry without a name"
                    );
                }
                usable
            })
            .collect();
        let skipped = total - kept.len();
        *self.slot_mut(category) = kept;
        skipped
    }

    pub fn get(&self, category: CatalogCategory) -> &[TraitDescriptor] {
        match category {
            CatalogCategory::Disciplines => &self.disciplines,
            CatalogCategory::Advantages => &self.advantages,
            CatalogCategory::Flaws => &self.flaws,
        }
    }

    pub fn descriptor(&self, kind: TraitKind, name: &str) -> Option<&TraitDescriptor> {
        let category = CatalogCategory::for_kind(kind)?;
        self.get(category).iter().find(|d| d.name == name)
    }

    /// Qualifier to solicit for a trait, if the catalog knows it.
    pub fn qualifier_for(&self, kind: TraitKind, name: &str) -> Option<Qualifier> {
        self.descriptor(kind, name).and_then(TraitDescriptor::qualifier)
    }

    pub fn is_empty(&self) -> bool {
        CatalogCategory::ALL
            .into_iter()
            .all(|category| self.get(category).is_empty())
    }

    fn slot_mut(&mut self, category: CatalogCategory) -> &mut Vec<TraitDescriptor> {
        match category {
            CatalogCategory::Disciplines => &mut self.disciplines,
            CatalogCategory::Advantages => &mut self.advantages,
            CatalogCategory::Flaws => &mut self.flaws,
        }
    }
}
