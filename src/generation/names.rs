//! Lexical helpers shared by the entity generators.

use geo::Coord;
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::generation::vocabulary::{RegionalVocabulary, pick, pick_settlement};

const SETTLEMENT_ENDINGS: [&str; 3] = ["pur", "nagar", "garh"];

/// Drops one trailing `pur`, `nagar` or `garh` from a settlement stem.
pub fn strip_settlement_ending(stem: &str) -> &str {
    SETTLEMENT_ENDINGS
        .iter()
        .find_map(|ending| stem.strip_suffix(ending))
        .unwrap_or(stem)
}

/// "<stem without ending> <regional suffix>", e.g. "Anand Ghat".
pub fn place_name<R: Rng + ?Sized>(rng: &mut R, vocabulary: &RegionalVocabulary) -> String {
    let stem = pick_settlement(rng);
    let suffix = pick(rng, vocabulary.place_suffixes);
    format!("{} {}", strip_settlement_ending(stem), suffix)
}

/// Last `n` characters of `word`.
pub fn tail(word: &str, n: usize) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(n)).collect()
}

/// First `n` characters of `word`.
pub fn head(word: &str, n: usize) -> String {
    word.chars().take(n).collect()
}

/// A localized display name, a regional honorific in front of `name`.
pub fn local_name<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    vocabulary: &RegionalVocabulary,
) -> String {
    format!("{} {}", pick(rng, vocabulary.local_prefixes), name)
}

/// Indian-style contact number. The first block can run to six digits.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = rng.gen_range(70_000..160_000u32);
    let second = rng.gen_range(10_000..100_000u32);
    format!("+91 {}{}", first, second)
}

pub fn image_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        rng.gen_range(0..1_000_000_000u32)
    )
}

/// A v4 UUID drawn from `rng`, so seeded runs reproduce their ids.
pub fn entity_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.r#gen::<[u8; 16]>()).into_uuid()
}

/// Rating in tenths of a star, 30..=50.
pub fn rating<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(30..=50)
}

/// Latitude and longitude rendered as decimal strings.
pub fn coordinate_strings(coord: Coord) -> (String, String) {
    (coord.y.to_string(), coord.x.to_string())
}
