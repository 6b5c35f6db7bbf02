//! Core types for TUI focus handling

use crate::form::Field;

/// Control that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Name input
    Name,
    /// Age input
    Age,
    /// Favourite colour input
    Colour,
    /// "Add User" button
    AddButton,
    /// User list
    List,
}

impl Focus {
    /// Get all focus targets in Tab order
    pub fn all() -> [Self; 5] {
        [
            Self::Name,
            Self::Age,
            Self::Colour,
            Self::AddButton,
            Self::List,
        ]
    }

    /// Next target in Tab order, wrapping
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous target in Tab order, wrapping
    pub fn previous(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Form field behind this target, if it is a text input
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Age => Some(Field::Age),
            Self::Colour => Some(Field::Colour),
            Self::AddButton | Self::List => None,
        }
    }

    /// Focus target of a form field
    pub fn from_field(field: Field) -> Self {
        match field {
            Field::Name => Self::Name,
            Field::Age => Self::Age,
            Field::Colour => Self::Colour,
        }
    }
}
