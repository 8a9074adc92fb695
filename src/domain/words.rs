//! Built-in word packs and draw-pool resolution.

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub const CLASSIC_PACK_ID: &str = "classic";
pub const VOYAGE_PACK_ID: &str = "voyage";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPack {
    pub id: &'static str,
    pub name: &'static str,
    pub words: &'static [&'static str],
}

const CLASSIC_WORDS: &[&str] = &[
    "APPLE", "BRIDGE", "CANDLE", "DRAGON", "ENGINE", "FOREST", "GLACIER", "HAMMER", "ISLAND",
    "JACKET", "KETTLE", "LANTERN", "MARBLE", "NEEDLE", "ORCHARD", "PYRAMID", "QUARTZ", "RIBBON",
    "SADDLE", "TEMPLE", "UMBRELLA", "VIOLIN", "WALNUT", "YOGURT", "ZEBRA", "ANCHOR", "BUTTER",
    "CIRCUS", "DESERT", "FALCON", "GARDEN", "HELMET", "IVORY", "JUNGLE", "KNIGHT", "LADDER",
    "MIRROR", "NOVEL", "OYSTER", "PALACE",
];

const VOYAGE_WORDS: &[&str] = &[
    "HARBOR", "COMPASS", "GALLEON", "ATLAS", "CARGO", "LIGHTHOUSE", "MONSOON", "PASSPORT",
    "RUDDER", "SEXTANT", "TUNDRA", "VOLCANO", "CARAVAN", "DELTA", "EQUATOR", "FJORD", "LAGOON",
    "MERIDIAN", "OASIS", "PRAIRIE", "REEF", "SUMMIT", "TRENCH", "VOYAGE", "ARCHIPELAGO",
    "BAZAAR", "CITADEL", "DUNE", "ESTUARY", "GROTTO",
];

pub const BUILTIN_PACKS: &[WordPack] = &[
    WordPack {
        id: CLASSIC_PACK_ID,
        name: "Classic",
        words: CLASSIC_WORDS,
    },
    WordPack {
        id: VOYAGE_PACK_ID,
        name: "Voyage",
        words: VOYAGE_WORDS,
    },
];

pub fn find_pack(id: &str) -> Option<&'static WordPack> {
    BUILTIN_PACKS.iter().find(|p| p.id == id)
}

/// Resolve selected pack ids into a draw pool: the deduplicated
/// (case-insensitive) union, uppercased, in pack order.
pub fn combined_pool(pack_ids: &[String]) -> Result<Vec<String>, DomainError> {
    if pack_ids.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("EmptyPackSelection".to_string()),
            "at least one word pack must be selected",
        ));
    }

    let mut seen = std::collections::HashSet::new();
    let mut pool = Vec::new();
    for id in pack_ids {
        let pack = find_pack(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::WordPack, format!("no word pack '{id}'"))
        })?;
        for word in pack.words {
            let upper = word.to_uppercase();
            if seen.insert(upper.clone()) {
                pool.push(upper);
            }
        }
    }
    Ok(pool)
}
