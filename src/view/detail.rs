use crate::model::Place;
use chrono::Local;
use std::fmt::{self, Write};

pub const EMPTY_DETAIL_MESSAGE: &str = "← Select a place from the list to see details";
pub const DATE_NOT_SPECIFIED: &str = "Date not specified";
pub const LANDMARKS_HEADING: &str = "Landmarks / Highlights";
pub const NOTES_HEADING: &str = "Notes & Memories";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    /// One entry per source line; blank lines are kept.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub title: String,
    pub meta: String,
    pub sections: Vec<DetailSection>,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Empty { message: String },
    Card(DetailCard),
}

impl DetailView {
    /// Builds the detail pane for `place`, or the empty state.
    ///
    /// `date_format` is a chrono format string applied to `createdAt` in
    /// local time.
    pub fn render(place: Option<&Place>, date_format: &str) -> Self {
        let Some(place) = place else {
            return DetailView::Empty {
                message: EMPTY_DETAIL_MESSAGE.to_string(),
            };
        };

        let mut sections = Vec::new();
        if let Some(section) = section(LANDMARKS_HEADING, place.landmarks()) {
            sections.push(section);
        }
        if let Some(section) = section(NOTES_HEADING, place.notes()) {
            sections.push(section);
        }

        DetailView::Card(DetailCard {
            title: place.name().to_string(),
            meta: meta_line(place),
            sections,
            added: added_line(place, date_format),
        })
    }

    pub fn card(&self) -> Option<&DetailCard> {
        match self {
            DetailView::Card(card) => Some(card),
            DetailView::Empty { .. } => None,
        }
    }
}

/// `country • visit`, dropping the country part when unset.
pub fn meta_line(place: &Place) -> String {
    let visit = if place.visit().is_empty() {
        DATE_NOT_SPECIFIED
    } else {
        place.visit()
    };
    if place.country().is_empty() {
        visit.to_string()
    } else {
        format!("{} • {}", place.country(), visit)
    }
}

/// `Added: <date>`; an unusable `date_format` falls back to the default.
fn added_line(place: &Place, date_format: &str) -> String {
    const PREFIX: &str = "Added: ";
    let local = place.created_at().with_timezone(&Local);

    let mut line = String::from(PREFIX);
    if write!(line, "{}", local.format(date_format)).is_err() {
        tracing::warn!(date_format, "Invalid date format, using default");
        line.truncate(PREFIX.len());
        let _ = write!(line, "{}", local.format(DEFAULT_DATE_FORMAT));
    }
    line
}

fn section(heading: &'static str, text: &str) -> Option<DetailSection> {
    if text.is_empty() {
        return None;
    }
    Some(DetailSection {
        heading,
        lines: text.lines().map(str::to_string).collect(),
    })
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailView::Empty { message } => write!(f, "{}", message),
            DetailView::Card(card) => {
                writeln!(f, "{}", card.title)?;
                writeln!(f, "{}", card.meta)?;
                for section in &card.sections {
                    writeln!(f)?;
                    writeln!(f, "{}", section.heading)?;
                    for line in &section.lines {
                        writeln!(f, "  {}", line)?;
                    }
                }
                writeln!(f)?;
                write!(f, "{}", card.added)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaceFields;

    fn place(fields: PlaceFields) -> Place {
        Place::from_record(PlaceFields {
            id: Some("x".to_string()),
            created_at: Some("2024-06-15T12:00:00.000Z".to_string()),
            ..fields
        })
        .unwrap()
    }

    #[test]
    fn test_no_place_renders_empty_state() {
        let view = DetailView::render(None, DEFAULT_DATE_FORMAT);
        assert_eq!(
            view,
            DetailView::Empty {
                message: EMPTY_DETAIL_MESSAGE.to_string()
            }
        );
        assert!(view.card().is_none());
    }

    #[test]
    fn test_meta_line_variants() {
        let full = place(PlaceFields::named("Rome").with_country("Italy").with_visit("May 2019"));
        assert_eq!(meta_line(&full), "Italy • May 2019");

        let no_visit = place(PlaceFields::named("Rome").with_country("Italy"));
        assert_eq!(meta_line(&no_visit), "Italy • Date not specified");

        let bare = place(PlaceFields::named("Rome"));
        assert_eq!(meta_line(&bare), DATE_NOT_SPECIFIED);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let view = DetailView::render(Some(&place(PlaceFields::named("Rome"))), DEFAULT_DATE_FORMAT);
        let card = view.card().unwrap();
        assert_eq!(card.title, "Rome");
        assert!(card.sections.is_empty());
    }

    #[test]
    fn test_sections_preserve_line_breaks() {
        let p = place(
            PlaceFields::named("Barcelona")
                .with_landmarks("Sagrada Família\n\nPark Güell")
                .with_notes("Amazing food"),
        );
        let view = DetailView::render(Some(&p), DEFAULT_DATE_FORMAT);
        let card = view.card().unwrap();
        assert_eq!(card.sections.len(), 2);
        assert_eq!(card.sections[0].heading, LANDMARKS_HEADING);
        assert_eq!(
            card.sections[0].lines,
            vec!["Sagrada Família", "", "Park Güell"]
        );
        assert_eq!(card.sections[1].heading, NOTES_HEADING);
        assert_eq!(card.sections[1].lines, vec!["Amazing food"]);
    }

    #[test]
    fn test_added_line_uses_date_format() {
        let p = place(PlaceFields::named("Rome"));
        let view = DetailView::render(Some(&p), "%Y");
        assert_eq!(view.card().unwrap().added, "Added: 2024");
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_default() {
        let p = place(PlaceFields::named("Rome"));
        let view = DetailView::render(Some(&p), "%Q");
        let added = &view.card().unwrap().added;
        assert!(added.starts_with("Added: 2024-06-1"));
        assert_eq!(added.len(), "Added: 2024-06-15".len());
    }

    #[test]
    fn test_display_renders_plain_text() {
        let p = place(PlaceFields::named("Rome").with_notes("line one\nline two"));
        let text = DetailView::render(Some(&p), "%Y").to_string();
        assert!(text.starts_with("Rome\nDate not specified\n"));
        assert!(text.contains("Notes & Memories\n  line one\n  line two\n"));
        assert!(text.ends_with("Added: 2024"));
    }
}
