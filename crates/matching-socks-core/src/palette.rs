//! Color palette management.
//!
//! The palette is the ordered list of colors the daily draw picks from.
//! It starts as the fixed 24-color built-in set, and users can append
//! custom colors. Built-in entries are immutable seed data.

use crate::error::{StoreError, ValidationError};
use crate::model::{timestamp_id, SockColor};
use crate::store::{keys, KvStore};

/// The 24 built-in sock colors.
pub fn default_palette() -> Vec<SockColor> {
    const SEED: &[(&str, &str, &str)] = &[
        ("1", "Red", "#FF0000"),
        ("2", "Blue", "#0000FF"),
        ("3", "Green", "#00FF00"),
        ("4", "Yellow", "#FFFF00"),
        ("5", "Purple", "#800080"),
        ("6", "Orange", "#FFA500"),
        ("7", "Pink", "#FFC0CB"),
        ("8", "Brown", "#A52A2A"),
        ("9", "Black", "#000000"),
        ("10", "White", "#FFFFFF"),
        ("11", "Gray", "#808080"),
        ("12", "Cyan", "#00FFFF"),
        ("13", "Lime", "#32CD32"),
        ("14", "Teal", "#008080"),
        ("15", "Indigo", "#4B0082"),
        ("16", "Violet", "#8A2BE2"),
        ("17", "Rose", "#FF1493"),
        ("18", "Amber", "#FFBF00"),
        ("19", "Emerald", "#50C878"),
        ("20", "Sky", "#87CEEB"),
        ("21", "Slate", "#708090"),
        ("22", "Zinc", "#71797E"),
        ("23", "Neutral", "#808080"),
        ("24", "Stone", "#928E85"),
    ];
    SEED.iter()
        .map(|&(id, name, hex)| SockColor {
            id: id.to_string(),
            name: name.to_string(),
            hex_code: hex.to_string(),
            is_default: true,
        })
        .collect()
}

/// Extra picker colors offered behind "see more".
pub fn extended_palette() -> Vec<SockColor> {
    const SEED: &[(&str, &str, &str)] = &[
        ("25", "Red-500", "#EF4444"),
        ("26", "Blue-500", "#3B82F6"),
        ("27", "Green-500", "#10B981"),
        ("28", "Yellow-500", "#F59E0B"),
        ("29", "Purple-500", "#8B5CF6"),
        ("30", "Pink-500", "#EC4899"),
        ("31", "Indigo-500", "#6366F1"),
        ("32", "Gray-500", "#6B7280"),
    ];
    SEED.iter()
        .map(|&(id, name, hex)| SockColor {
            id: id.to_string(),
            name: name.to_string(),
            hex_code: hex.to_string(),
            is_default: false,
        })
        .collect()
}

/// Validate a hex color and normalize it to `#RRGGBB` (uppercase).
///
/// Accepts 3 or 6 hex digits with an optional leading '#'; the 3-digit
/// short form is expanded so the stored representation is consistent.
pub fn normalize_hex(input: &str) -> Result<String, ValidationError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidHexColor(input.to_string()));
    }
    let expanded = match digits.len() {
        3 => digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>(),
        6 => digits.to_string(),
        _ => return Err(ValidationError::InvalidHexColor(input.to_string())),
    };
    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}

/// Load the palette, falling back to the built-in set when the key is
/// absent or does not parse.
pub fn load(store: &KvStore) -> Vec<SockColor> {
    store
        .get_json(keys::COLORS)
        .unwrap_or_else(default_palette)
}

/// Persist the palette as an ordered JSON sequence.
pub fn save(store: &mut KvStore, colors: &[SockColor]) -> Result<(), StoreError> {
    store.set_json(keys::COLORS, &colors)
}

/// Validate, normalize, and append a custom color.
pub fn add_custom(
    store: &mut KvStore,
    name: &str,
    hex: &str,
) -> Result<SockColor, crate::error::CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyColorName.into());
    }
    let hex_code = normalize_hex(hex)?;

    let mut colors = load(store);
    let mut id = timestamp_id();
    while colors.iter().any(|c| c.id == format!("custom-{id}")) {
        id += 1;
    }
    let color = SockColor {
        id: format!("custom-{id}"),
        name: name.to_string(),
        hex_code,
        is_default: false,
    };
    colors.push(color.clone());
    save(store, &colors)?;
    Ok(color)
}

/// Remove a custom color. Built-in colors are refused.
pub fn remove(store: &mut KvStore, id: &str) -> Result<(), crate::error::CoreError> {
    let mut colors = load(store);
    let Some(pos) = colors.iter().position(|c| c.id == id) else {
        return Err(ValidationError::UnknownColor(id.to_string()).into());
    };
    if colors[pos].is_default {
        return Err(ValidationError::BuiltinColor(id.to_string()).into());
    }
    colors.remove(pos);
    save(store, &colors)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("store.json"));
        (dir, store)
    }

    #[test]
    fn default_palette_has_24_entries() {
        let palette = default_palette();
        assert_eq!(palette.len(), 24);
        assert!(palette.iter().all(|c| c.is_default));
        assert_eq!(palette[0].name, "Red");
        assert_eq!(palette[23].name, "Stone");
    }

    #[test]
    fn absent_key_falls_back_to_defaults() {
        let (_dir, store) = temp_store();
        assert_eq!(load(&store), default_palette());
    }

    #[test]
    fn corrupt_palette_falls_back_to_defaults() {
        let (_dir, mut store) = temp_store();
        store.set(keys::COLORS, "not json at all").unwrap();
        assert_eq!(load(&store), default_palette());
    }

    #[test]
    fn normalize_expands_short_form() {
        assert_eq!(normalize_hex("abc").unwrap(), "#AABBCC");
        assert_eq!(normalize_hex("#f0c").unwrap(), "#FF00CC");
    }

    #[test]
    fn normalize_uppercases_and_prefixes() {
        assert_eq!(normalize_hex("ff00aa").unwrap(), "#FF00AA");
        assert_eq!(normalize_hex("#FF00AA").unwrap(), "#FF00AA");
    }

    #[test]
    fn normalize_rejects_bad_input() {
        assert!(normalize_hex("").is_err());
        assert!(normalize_hex("#12345").is_err());
        assert!(normalize_hex("ggg").is_err());
        assert!(normalize_hex("#1234567").is_err());
    }

    #[test]
    fn add_custom_appends_and_persists() {
        let (_dir, mut store) = temp_store();
        let color = add_custom(&mut store, " Mint ", "a0ffc0").unwrap();
        assert!(color.id.starts_with("custom-"));
        assert_eq!(color.name, "Mint");
        assert_eq!(color.hex_code, "#A0FFC0");
        assert!(!color.is_default);

        let palette = load(&store);
        assert_eq!(palette.len(), 25);
        assert_eq!(palette.last().unwrap(), &color);
    }

    #[test]
    fn add_custom_rejects_empty_name_and_bad_hex() {
        let (_dir, mut store) = temp_store();
        assert!(add_custom(&mut store, "   ", "#123456").is_err());
        assert!(add_custom(&mut store, "Mud", "#12345z").is_err());
        // Nothing was persisted.
        assert!(!store.contains(keys::COLORS));
    }

    #[test]
    fn remove_refuses_builtins() {
        let (_dir, mut store) = temp_store();
        assert!(remove(&mut store, "1").is_err());
        assert!(remove(&mut store, "does-not-exist").is_err());
    }

    #[test]
    fn remove_drops_custom_color() {
        let (_dir, mut store) = temp_store();
        let color = add_custom(&mut store, "Mint", "#A0FFC0").unwrap();
        remove(&mut store, &color.id).unwrap();
        assert_eq!(load(&store).len(), 24);
    }
}
