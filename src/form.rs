//! Add-user form: draft fields, validation and submission

use crate::store::{Record, RecordStore};

/// Input fields of the add-user form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Name input
    Name,
    /// Age input
    Age,
    /// Favourite colour input
    Colour,
}

impl Field {
    /// Get all fields in form order
    pub fn all() -> [Self; 3] {
        [Self::Name, Self::Age, Self::Colour]
    }

    /// Get display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Colour => "Favourite Colour",
        }
    }

    /// Get placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter name",
            Self::Age => "Enter age",
            Self::Colour => "Enter favourite colour",
        }
    }
}

/// Reasons a submission is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left empty
    #[error("{} is required", .0.label())]
    MissingField(Field),

    /// Age text is not a non-negative whole number
    #[error("Age must be a whole number, got \"{0}\"")]
    InvalidAge(String),
}

/// A validated record, not yet added to a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Name
    pub name: String,
    /// Parsed age
    pub age: u32,
    /// Favourite colour
    pub favourite_colour: String,
}

/// Validate raw form text
///
/// Fields are checked in form order and the first empty one is reported.
/// With `trim` set, whitespace-only text counts as empty and the stored
/// values are trimmed.
pub fn validate(name: &str, age: &str, colour: &str, trim: bool) -> Result<NewRecord, ValidationError> {
    let clean = |s: &str| if trim { s.trim().to_string() } else { s.to_string() };
    let (name, age_text, colour) = (clean(name), clean(age), clean(colour));

    for (field, value) in [(Field::Name, &name), (Field::Age, &age_text), (Field::Colour, &colour)] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let age = age_text
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAge(age_text.clone()))?;

    Ok(NewRecord {
        name,
        age,
        favourite_colour: colour,
    })
}

/// Draft values bound to the form inputs
#[derive(Debug, Clone, Default)]
pub struct DraftForm {
    /// Name draft
    pub name: String,
    /// Age draft, kept as typed
    pub age: String,
    /// Favourite colour draft
    pub colour: String,
    /// Whether whitespace-only drafts count as empty
    pub trim_input: bool,
}

impl DraftForm {
    /// Create an empty form
    pub fn new(trim_input: bool) -> Self {
        Self {
            trim_input,
            ..Self::default()
        }
    }

    /// Replace the name draft
    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    /// Replace the age draft
    pub fn set_draft_age(&mut self, text: impl Into<String>) {
        self.age = text.into();
    }

    /// Replace the favourite colour draft
    pub fn set_draft_colour(&mut self, text: impl Into<String>) {
        self.colour = text.into();
    }

    /// Current text of a field
    pub fn draft(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Colour => &self.colour,
        }
    }

    fn draft_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Colour => &mut self.colour,
        }
    }

    /// Add character to a field
    pub fn push_char(&mut self, field: Field, c: char) {
        self.draft_mut(field).push(c);
    }

    /// Append pasted text to a field, dropping line breaks
    pub fn push_str(&mut self, field: Field, text: &str) {
        let draft = self.draft_mut(field);
        draft.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Remove last character from a field
    pub fn pop_char(&mut self, field: Field) {
        self.draft_mut(field).pop();
    }

    /// Clear a single field
    pub fn clear(&mut self, field: Field) {
        self.draft_mut(field).clear();
    }

    /// Clear all three drafts
    pub fn reset(&mut self) {
        self.name.clear();
        self.age.clear();
        self.colour.clear();
    }

    /// Validate the drafts and add the record to `store`
    ///
    /// Drafts are reset only when the record was added; on error they are
    /// left as typed so the user can correct them.
    pub fn submit(&mut self, store: &mut RecordStore) -> Result<Record, ValidationError> {
        let new = validate(&self.name, &self.age, &self.colour, self.trim_input).map_err(|e| {
            tracing::debug!(error = %e, "Submission rejected");
            e
        })?;

        let record = store.add(new.name, new.age, new.favourite_colour);
        self.reset();
        Ok(record)
    }
}
