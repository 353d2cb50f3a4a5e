use crate::foundation::error::{PhotocalError, PhotocalResult};

/// Parsed form of the compact page format string, e.g. `tmde` = photo on
/// top, then a month grid, a date box and an event list.
///
/// Letters are validated against the registry at render time, not here, so
/// callers can register custom box types before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageFormat {
    pub photo_top: bool,
    pub boxes: Vec<char>,
}

impl PageFormat {
    pub fn new(photo_top: bool, boxes: Vec<char>) -> PhotocalResult<Self> {
        if boxes.is_empty() {
            return Err(PhotocalError::EmptyFormat);
        }
        Ok(Self { photo_top, boxes })
    }
}

impl std::str::FromStr for PageFormat {
    type Err = PhotocalError;

    fn from_str(s: &str) -> PhotocalResult<Self> {
        let mut chars = s.chars();
        let photo_top = match chars.next() {
            Some('t') => true,
            Some('b') => false,
            _ => {
                return Err(PhotocalError::config(format!(
                    "format '{s}' must start with 't' (photo on top) or 'b' (photo at bottom)"
                )));
            }
        };
        let boxes: Vec<char> = chars.collect();
        if let Some(bad) = boxes
            .iter()
            .find(|c| !(c.is_ascii_alphanumeric() || **c == '_'))
        {
            return Err(PhotocalError::config(format!(
                "format '{s}' contains invalid box letter '{bad}'"
            )));
        }
        Self::new(photo_top, boxes)
    }
}

impl std::fmt::Display for PageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.photo_top { 't' } else { 'b' })?;
        for c in &self.boxes {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/format.rs"]
mod tests;
