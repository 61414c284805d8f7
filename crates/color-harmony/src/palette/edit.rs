//! Snapshot edits applied by the palette owner.
//!
//! Every operation takes the current palette and returns a new one. An
//! unknown id or an out-of-range index returns the input unchanged.

use super::entry::{ColorEntry, ColorId};
use crate::color::{HexColor, ParseColorError};

/// Maximum number of colors kept when importing a list.
pub const MAX_IMPORTED: usize = 9;

/// Flip the lock flag of the entry with `id`.
pub fn toggle_lock(colors: &[ColorEntry], id: &ColorId) -> Vec<ColorEntry> {
    colors
        .iter()
        .map(|c| {
            let mut c = c.clone();
            if &c.id == id {
                c.locked = !c.locked;
            }
            c
        })
        .collect()
}

/// Replace the hex of the entry with `id`; its name follows the new hex.
pub fn update_hex(
    colors: &[ColorEntry],
    id: &ColorId,
    hex: &str,
) -> Result<Vec<ColorEntry>, ParseColorError> {
    let hex: HexColor = hex.parse()?;

    Ok(colors
        .iter()
        .map(|c| {
            let mut c = c.clone();
            if &c.id == id {
                c.hex = hex;
                c.name = hex.to_string();
            }
            c
        })
        .collect())
}

/// Move the entry at `from` so that it ends up at index `to`.
pub fn move_color(colors: &[ColorEntry], from: usize, to: usize) -> Vec<ColorEntry> {
    let mut out = colors.to_vec();
    if from >= out.len() || to >= out.len() {
        return out;
    }
    let entry = out.remove(from);
    out.insert(to, entry);
    out
}

/// Build a fresh palette from loosely formatted hex strings.
///
/// Strings are trimmed and a missing leading `#` is added; anything that
/// still is not a valid `#RRGGBB` is dropped. At most [`MAX_IMPORTED`]
/// unlocked entries are returned, possibly none.
pub fn palette_from_hexes<I, S>(hexes: I) -> Vec<ColorEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hexes
        .into_iter()
        .filter_map(|s| normalize(s.as_ref()))
        .take(MAX_IMPORTED)
        .map(ColorEntry::new)
        .collect()
}

fn normalize(raw: &str) -> Option<HexColor> {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        trimmed.parse().ok()
    } else {
        format!("#{trimmed}").parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(hexes: &[&str]) -> Vec<ColorEntry> {
        hexes
            .iter()
            .map(|h| ColorEntry::new(h.parse().unwrap()))
            .collect()
    }

    fn hexes(colors: &[ColorEntry]) -> Vec<String> {
        colors.iter().map(|c| c.hex.to_string()).collect()
    }

    #[test]
    fn test_toggle_lock_twice_restores() {
        let colors = palette(&["#111111", "#222222"]);
        let id = colors[1].id.clone();
        let once = toggle_lock(&colors, &id);
        assert!(!once[0].locked);
        assert!(once[1].locked);
        assert_eq!(toggle_lock(&once, &id), colors);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let colors = palette(&["#111111"]);
        assert_eq!(toggle_lock(&colors, &ColorId::from("nope")), colors);
    }

    #[test]
    fn test_update_hex_resets_name() {
        let mut colors = palette(&["#111111", "#222222"]);
        colors[0].name = "Midnight".to_string();
        colors[0].locked = true;
        let id = colors[0].id.clone();

        let out = update_hex(&colors, &id, "#abcdef").unwrap();
        assert_eq!(out[0].hex.to_string(), "#ABCDEF");
        assert_eq!(out[0].name, "#ABCDEF");
        assert!(out[0].locked);
        assert_eq!(out[0].id, id);
        assert_eq!(out[1], colors[1]);
    }

    #[test]
    fn test_update_hex_rejects_malformed() {
        let colors = palette(&["#111111"]);
        let id = colors[0].id.clone();
        assert_eq!(
            update_hex(&colors, &id, "abcdef"),
            Err(ParseColorError::MissingHash)
        );
        assert!(update_hex(&colors, &id, "#abc").is_err());
    }

    #[test]
    fn test_move_color() {
        let colors = palette(&["#111111", "#222222", "#333333", "#444444"]);
        assert_eq!(
            hexes(&move_color(&colors, 0, 2)),
            ["#222222", "#333333", "#111111", "#444444"]
        );
        assert_eq!(
            hexes(&move_color(&colors, 3, 2)),
            ["#111111", "#222222", "#444444", "#333333"]
        );
        assert_eq!(move_color(&colors, 1, 1), colors);
        assert_eq!(move_color(&colors, 4, 0), colors);
        assert_eq!(move_color(&colors, 0, 4), colors);
    }

    #[test]
    fn test_palette_from_hexes_normalizes() {
        let out = palette_from_hexes([" #ff0000 ", "00ff00", "blue", "#12345", "#0000ff"]);
        assert_eq!(hexes(&out), ["#FF0000", "#00FF00", "#0000FF"]);
        assert!(out.iter().all(|c| !c.locked && c.name == c.hex.to_string()));
    }

    #[test]
    fn test_palette_from_hexes_caps_at_nine() {
        let input: Vec<String> = (0..12).map(|i| format!("#0000{i:02X}")).collect();
        let out = palette_from_hexes(&input);
        assert_eq!(out.len(), MAX_IMPORTED);
        assert_eq!(out[8].hex.to_string(), "#000008");
    }

    #[test]
    fn test_palette_from_hexes_empty() {
        assert!(palette_from_hexes(Vec::<String>::new()).is_empty());
        assert!(palette_from_hexes(["not a color"]).is_empty());
    }
}
