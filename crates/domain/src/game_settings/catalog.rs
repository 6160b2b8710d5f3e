//! Declarative scheme table.

use super::GameSetting;
use crate::attributes::{
    AlignmentRole, AlignmentRule, AllocationError, AllocationKind, AttributeKey, AttributeScheme,
    AttributeSlot, OpposedPair,
};

use crate::attributes::AttributeKey::{Dominion, Entropy, Gnosis, Harmonia, Imperius, Katra};

/// Points shared by each opposed pair in the pair-based settings.
const PAIR_TOTAL: i32 = 20;

const PERCENTILE: AllocationKind = AllocationKind::Independent { min: 30, max: 90 };

struct SlotDef {
    key: AttributeKey,
    label: &'static str,
    kind: AllocationKind,
}

struct SchemeDef {
    title: &'static str,
    description: &'static str,
    slots: &'static [SlotDef],
    pairs: &'static [OpposedPair],
    alignment: Option<AlignmentRule>,
}

const fn independent(key: AttributeKey, label: &'static str) -> SlotDef {
    SlotDef {
        key,
        label,
        kind: PERCENTILE,
    }
}

const fn opposed(key: AttributeKey, label: &'static str, partner: AttributeKey) -> SlotDef {
    SlotDef {
        key,
        label,
        kind: AllocationKind::Opposed {
            partner,
            total: PAIR_TOTAL,
        },
    }
}

const fn aligned(
    key: AttributeKey,
    label: &'static str,
    role: AlignmentRole,
    counterpart: AttributeKey,
) -> SlotDef {
    SlotDef {
        key,
        label,
        kind: AllocationKind::Aligned { role, counterpart },
    }
}

const CORE_PAIRS: &[OpposedPair] = &[
    OpposedPair::new(Katra, Imperius, PAIR_TOTAL),
    OpposedPair::new(Dominion, Harmonia, PAIR_TOTAL),
];

const HARROWING_TRUTH: SchemeDef = SchemeDef {
    title: "Core Attributes (D100)",
    description: "Allocate points to your six core attributes (30% to 90%).",
    slots: &[
        independent(Katra, "Strength (STR)"),
        independent(Dominion, "Dexterity (DEX)"),
        independent(Imperius, "Constitution (CON)"),
        independent(Harmonia, "Intelligence (INT)"),
        independent(Gnosis, "Sanity (SAN)"),
        independent(Entropy, "Charisma (CHA)"),
    ],
    pairs: &[],
    alignment: None,
};

const PLANET_OF_THE_SONG: SchemeDef = SchemeDef {
    title: "Core Attributes (Planet of the Song)",
    description: "Set your four core attributes (Force, Arcanum, Essence, Prowess).",
    slots: &[
        opposed(Katra, "Force", Imperius),
        opposed(Imperius, "Essence", Katra),
        opposed(Dominion, "Arcanum", Harmonia),
        opposed(Harmonia, "Prowess", Dominion),
    ],
    pairs: CORE_PAIRS,
    alignment: None,
};

const CONFLICT_HORIZON: SchemeDef = SchemeDef {
    title: "Pentagram Attributes (Opposed Pairs)",
    description: "The system enforces an antagonistic relationship: increasing one attribute reduces its opposite.",
    slots: &[
        opposed(Katra, "Katra (Physical)", Imperius),
        opposed(Imperius, "Imperius (Will/Social)", Katra),
        opposed(Dominion, "Dominion (Endurance)", Harmonia),
        opposed(Harmonia, "Harmonia (Empathy/Psionic)", Dominion),
        aligned(Gnosis, "Gnosis (Order)", AlignmentRole::Driver, Entropy),
        aligned(Entropy, "Entropy (Chaos)", AlignmentRole::Derived, Gnosis),
    ],
    pairs: CORE_PAIRS,
    alignment: Some(AlignmentRule::new(Gnosis, Entropy)),
};

fn definition(setting: GameSetting) -> &'static SchemeDef {
    match setting {
        GameSetting::HarrowingTruth => &HARROWING_TRUTH,
        GameSetting::PlanetOfTheSong => &PLANET_OF_THE_SONG,
        GameSetting::ConflictHorizon => &CONFLICT_HORIZON,
    }
}

/// Looks up the scheme for a known setting. Total over [`GameSetting`].
pub fn resolve_scheme(setting: GameSetting) -> AttributeScheme {
    let def = definition(setting);
    let slots = def
        .slots
        .iter()
        .map(|slot| AttributeSlot {
            key: slot.key,
            label: slot.label.to_string(),
            kind: slot.kind,
        })
        .collect();

    AttributeScheme::new(
        setting,
        def.title,
        def.description,
        slots,
        def.pairs.to_vec(),
        def.alignment,
    )
}

/// Looks up the scheme for a setting given by name or id.
///
/// # Errors
///
/// Returns [`AllocationError::UnknownSetting`] for anything that is not a known setting.
pub fn resolve_scheme_id(setting: &str) -> Result<AttributeScheme, AllocationError> {
    setting.parse::<GameSetting>().map(resolve_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeRange;

    #[test]
    fn harrowing_truth_is_six_independent_percentiles() {
        let scheme = resolve_scheme(GameSetting::HarrowingTruth);

        assert_eq!(scheme.keys().count(), 6);
        assert!(scheme.opposed_pairs().is_empty());
        assert!(scheme.alignment().is_none());
        for slot in scheme.slots() {
            assert_eq!(slot.kind.range(), AttributeRange::new(30, 90));
        }
        assert_eq!(scheme.label(Gnosis), Some("Sanity (SAN)"));
    }

    #[test]
    fn planet_of_the_song_is_two_pairs_of_twenty() {
        let scheme = resolve_scheme(GameSetting::PlanetOfTheSong);

        assert_eq!(
            scheme.keys().collect::<Vec<_>>(),
            vec![Katra, Imperius, Dominion, Harmonia]
        );
        assert_eq!(scheme.opposed_pairs().len(), 2);
        assert!(scheme.opposed_pairs().iter().all(|p| p.total == 20));
        assert!(scheme.alignment().is_none());
        assert!(!scheme.contains(Entropy));
    }

    #[test]
    fn conflict_horizon_adds_the_alignment_axis() {
        let scheme = resolve_scheme(GameSetting::ConflictHorizon);

        assert_eq!(scheme.keys().count(), 6);
        assert_eq!(scheme.opposed_pairs().len(), 2);
        assert_eq!(scheme.alignment(), Some(&AlignmentRule::new(Gnosis, Entropy)));
        assert_eq!(scheme.kind(Entropy).map(|k| k.range()), Some(AttributeRange::new(-100, 100)));
    }

    #[test]
    fn slot_kinds_agree_with_pair_and_alignment_tables() {
        for setting in GameSetting::ALL {
            let scheme = resolve_scheme(setting);
            for slot in scheme.slots() {
                match slot.kind {
                    AllocationKind::Independent { .. } => {
                        assert!(scheme.pair_for(slot.key).is_none());
                    }
                    AllocationKind::Opposed { partner, total } => {
                        let pair = scheme.pair_for(slot.key).unwrap();
                        assert_eq!(pair.counterpart_of(slot.key), Some(partner));
                        assert_eq!(pair.total, total);
                    }
                    AllocationKind::Aligned { role, counterpart } => {
                        let rule = scheme.alignment().unwrap();
                        match role {
                            AlignmentRole::Driver => {
                                assert_eq!((rule.driver, rule.derived), (slot.key, counterpart))
                            }
                            AlignmentRole::Derived => {
                                assert_eq!((rule.driver, rule.derived), (counterpart, slot.key))
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn resolving_an_unknown_id_fails() {
        assert_eq!(
            resolve_scheme_id("Spelljammer"),
            Err(AllocationError::UnknownSetting("Spelljammer".to_string()))
        );
        assert_eq!(
            resolve_scheme_id("planet_of_the_song").map(|s| s.setting()),
            Ok(GameSetting::PlanetOfTheSong)
        );
    }
}
