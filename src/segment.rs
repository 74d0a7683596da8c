use crate::colors::Color;
use crate::error::PrintError;

/// One element of a flattened print request: `text, color, text, color, ...`
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Text(String),
    Color(Color),
}

impl From<&str> for Slot {
    fn from(text: &str) -> Self {
        Slot::Text(text.to_string())
    }
}

impl From<String> for Slot {
    fn from(text: String) -> Self {
        Slot::Text(text)
    }
}

impl From<&String> for Slot {
    fn from(text: &String) -> Self {
        Slot::Text(text.clone())
    }
}

impl From<Color> for Slot {
    fn from(color: Color) -> Self {
        Slot::Color(color)
    }
}

/// A piece of text and the color it is rendered in
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub color: Color,
}

impl Segment {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Segment {
            text: text.into(),
            color,
        }
    }
}

/// Pair a flattened slot list into segments.
///
/// Every even position must hold text and every odd position the color
/// that applies to the text before it.
pub fn pair_slots(slots: &[Slot]) -> Result<Vec<Segment>, PrintError> {
    if slots.len() % 2 != 0 {
        return Err(PrintError::OddSlotCount { count: slots.len() });
    }
    if slots.is_empty() {
        return Err(PrintError::NoSegments);
    }

    let mut segments = Vec::with_capacity(slots.len() / 2);
    for (pair_idx, pair) in slots.chunks_exact(2).enumerate() {
        let text = match &pair[0] {
            Slot::Text(text) => text,
            Slot::Color(color) => {
                return Err(PrintError::NotText {
                    index: pair_idx * 2,
                    found: color.name().to_string(),
                })
            }
        };
        let color = match &pair[1] {
            Slot::Color(color) => *color,
            Slot::Text(found) => {
                return Err(PrintError::NotColor {
                    index: pair_idx * 2 + 1,
                    found: found.clone(),
                })
            }
        };
        segments.push(Segment::new(text.as_str(), color));
    }
    Ok(segments)
}

/// Build a `Vec<Slot>` from alternating text and color expressions.
///
/// ```
/// use betterprint::{slots, Color, Slot};
///
/// let s = slots!["Hello ", Color::Red, "world", Color::Reset];
/// assert_eq!(s.len(), 4);
/// assert_eq!(s[1], Slot::Color(Color::Red));
/// ```
#[macro_export]
macro_rules! slots {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::Slot::from($item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_slots_in_order() {
        let slots = vec![
            Slot::from("Hello"),
            Slot::from(Color::Red),
            Slot::from(String::from(" world")),
            Slot::from(Color::Reset),
        ];
        let segments = pair_slots(&slots).unwrap();
        assert_eq!(
            segments,
            vec![Segment::new("Hello", Color::Red), Segment::new(" world", Color::Reset)]
        );
    }

    #[test]
    fn test_odd_slot_count_rejected() {
        let slots = vec![Slot::from("a"), Slot::from(Color::Red), Slot::from("b")];
        match pair_slots(&slots) {
            Err(PrintError::OddSlotCount { count }) => assert_eq!(count, 3),
            other => panic!("expected OddSlotCount, got {:?}", other),
        }
    }

    #[test]
    fn test_color_in_text_position_rejected() {
        let slots = vec![
            Slot::from("ok"),
            Slot::from(Color::Red),
            Slot::from(Color::Green),
            Slot::from(Color::Reset),
        ];
        match pair_slots(&slots) {
            Err(PrintError::NotText { index, found }) => {
                assert_eq!(index, 2);
                assert_eq!(found, "green");
            }
            other => panic!("expected NotText, got {:?}", other),
        }
    }

    #[test]
    fn test_text_in_color_position_rejected() {
        let slots = vec![Slot::from("a"), Slot::from("b")];
        assert!(matches!(
            pair_slots(&slots),
            Err(PrintError::NotColor { index: 1, .. })
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(pair_slots(&[]), Err(PrintError::NoSegments)));
    }

    #[test]
    fn test_slots_macro_mixes_types() {
        let owned = String::from("owned");
        let s = crate::slots!["lit", Color::Cyan, owned, Color::Reset];
        assert_eq!(s[0], Slot::Text("lit".to_string()));
        assert_eq!(s[1], Slot::Color(Color::Cyan));
        assert_eq!(s[2], Slot::Text("owned".to_string()));
    }
}
