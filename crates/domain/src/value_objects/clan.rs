//! Clan (lineage) lookup.
//!
//! Each clan lists zero to three in-clan disciplines and a bane. A clan with
//! a non-empty list requires at least [`crate::ruleset::IN_CLAN_MINIMUM`]
//! discipline dots to fall within it; a clan with an empty list has no fixed
//! affinity and imposes nothing.

use std::fmt;

use crate::error::DomainError;

/// A selectable clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clan {
    pub name: &'static str,
    pub disciplines: &'static [&'static str],
    pub bane: &'static str,
}

impl Clan {
    /// Look up a clan by exact name.
    pub fn lookup(name: &str) -> Option<&'static Clan> {
        CLANS.iter().find(|clan| clan.name == name)
    }

    /// Like [`Clan::lookup`], but trims input and reports unknown names.
    pub fn parse(name: &str) -> Result<&'static Clan, DomainError> {
        Self::lookup(name.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown clan: {}", name)))
    }

    /// All clans in display order.
    pub fn all() -> &'static [Clan] {
        &CLANS
    }

    pub fn has_affinity(&self) -> bool {
        !self.disciplines.is_empty()
    }

    pub fn is_in_clan(&self, discipline: &str) -> bool {
        self.disciplines.contains(&discipline)
    }
}

impl fmt::Display for Clan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const CLANS: [Clan; 15] = [
    Clan {
        name: "Banu Haqim",
        disciplines: &["Blood Sorcery", "Celerity", "Obfuscate"],
        bane: "Judgment: Lose Humanity for witnessing corruption without acting",
    },
    Clan {
        name: "Brujah",
        disciplines: &["Celerity", "Potence", "Presence"],
        bane: "Violent Temper: Difficulty +2 to resist fury frenzy",
    },
    Clan {
        name: "Gangrel",
        disciplines: &["Animalism", "Fortitude", "Protean"],
        bane: "Bestial Features: Animal features emerge when Hunger 4+",
    },
    Clan {
        name: "Hecata",
        disciplines: &["Auspex", "Fortitude", "Oblivion"],
        bane: "Painful Kiss: Feeding causes intense pain to victim",
    },
    Clan {
        name: "Lasombra",
        disciplines: &["Dominate", "Oblivion", "Potence"],
        bane: "Callous: Cannot gain Humanity from Remorse",
    },
    Clan {
        name: "Malkavian",
        disciplines: &["Auspex", "Dominate", "Obfuscate"],
        bane: "Fractured Perspective: Must have at least one mental derangement",
    },
    Clan {
        name: "Ministry",
        disciplines: &["Obfuscate", "Presence", "Protean"],
        bane: "Abhors the Light: Additional damage from sunlight",
    },
    Clan {
        name: "Nosferatu",
        disciplines: &["Animalism", "Obfuscate", "Potence"],
        bane: "Repulsive: Appearance 0, automatic fail on Persuasion/Performance vs mortals",
    },
    Clan {
        name: "Ravnos",
        disciplines: &["Animalism", "Obfuscate", "Presence"],
        bane: "Doomed: Cannot rest in same place twice in 7 nights",
    },
    Clan {
        name: "Salubri",
        disciplines: &["Auspex", "Dominate", "Fortitude"],
        bane: "Third Eye: Visible third eye when using Disciplines",
    },
    Clan {
        name: "Toreador",
        disciplines: &["Auspex", "Celerity", "Presence"],
        bane: "Aesthetic Fixation: May become entranced by beauty",
    },
    Clan {
        name: "Tremere",
        disciplines: &["Auspex", "Blood Sorcery", "Dominate"],
        bane: "Deficient Blood: Blood bonds form one step stronger",
    },
    Clan {
        name: "Tzimisce",
        disciplines: &["Animalism", "Dominate", "Protean"],
        bane: "Grounded: Must rest with homeland soil",
    },
    Clan {
        name: "Ventrue",
        disciplines: &["Dominate", "Fortitude", "Presence"],
        bane: "Rarefied Taste: Can only feed from specific type of mortal",
    },
    Clan {
        name: "Caitiff",
        disciplines: &[],
        bane: "Suspect Blood: Ostracized by Camarilla",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_clans() {
        let brujah = Clan::lookup("Brujah").expect("Brujah should exist");
        assert!(brujah.is_in_clan("Potence"));
        assert!(!brujah.is_in_clan("Auspex"));
        assert!(Clan::lookup("Baali").is_none());
    }

    #[test]
    fn caitiff_has_no_fixed_affinity() {
        let caitiff = Clan::lookup("Caitiff").expect("Caitiff should exist");
        assert!(!caitiff.has_affinity());
    }

    #[test]
    fn every_other_clan_lists_three_disciplines() {
        for clan in Clan::all().iter().filter(|c| c.name != "Caitiff") {
            assert_eq!(clan.disciplines.len(), 3, "{} should list 3", clan.name);
        }
        assert_eq!(Clan::all().len(), 15);
    }

    #[test]
    fn parse_trims_and_rejects_unknown() {
        let clan = Clan::parse(" Tremere ").unwrap();
        assert_eq!(clan.name, "Tremere");
        assert!(Clan::parse("Nobody").is_err());
    }
}
