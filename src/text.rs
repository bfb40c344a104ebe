//! Item name and description helpers.

use crate::config::NameExtraction;

/// Marker Steam puts in front of the effect name in item descriptions.
pub const EFFECT_MARKER: &str = "Unusual Effect";

/// Quality prefix of Unusual item names.
pub const UNUSUAL_TOKEN: &str = "Unusual";

/// True iff a description line carries the Unusual effect marker.
#[must_use]
pub fn contains_effect_marker(line: &str) -> bool {
    contains_marker(line, EFFECT_MARKER)
}

/// True iff an item's display name marks it as Unusual.
#[must_use]
pub fn is_unusual_item_name(name: &str) -> bool {
    has_token(name, UNUSUAL_TOKEN)
}

/// [`contains_effect_marker`] with a caller-chosen marker.
#[must_use]
pub fn contains_marker(line: &str, marker: &str) -> bool {
    line.contains(marker)
}

/// [`is_unusual_item_name`] with a caller-chosen token.
#[must_use]
pub fn has_token(name: &str, token: &str) -> bool {
    name.contains(token)
}

/// Cut the effect name out of a description line.
///
/// Returns `None` when the line has no marker, or when nothing is left
/// after stripping.
#[must_use]
pub fn extract_effect_name<'a>(
    line: &'a str,
    marker: &str,
    extraction: NameExtraction,
) -> Option<&'a str> {
    let (start, _) = line.match_indices(marker).next()?;
    let name = match extraction {
        NameExtraction::AfterMarker => line[start + marker.len()..]
            .trim_start()
            .trim_start_matches(':')
            .trim(),
        NameExtraction::FixedOffset(chars) => match line.char_indices().nth(chars) {
            Some((offset, _)) => &line[offset..],
            None => "",
        },
    };
    (!name.is_empty()).then_some(name)
}

/// Replace the first `token` in an item name with the effect name.
///
/// `"Unusual Team Captain"` with `Sunbeams` becomes `"Sunbeams Team Captain"`.
#[must_use]
pub fn standardized_name(item_name: &str, token: &str, effect_name: &str) -> String {
    item_name.replacen(token, effect_name, 1)
}
