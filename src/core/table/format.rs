//! Annotation tokens and the layered cell format

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a column or cell
///
/// There is no separate "center" token: `=` and "nothing said" are the same
/// value, which is also what a legacy `:---:` or `---` delimiter maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Parse from an alignment token character
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            '<' => Some(Alignment::Left),
            '=' => Some(Alignment::Center),
            '>' => Some(Alignment::Right),
            _ => None,
        }
    }

    /// The token that produces this alignment
    pub fn token(&self) -> char {
        match self {
            Alignment::Left => '<',
            Alignment::Center => '=',
            Alignment::Right => '>',
        }
    }
}

/// Span marker carried by a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Span {
    /// `^`: absorbed into the cell above
    Row,
    /// `{`: absorbed into the cell to the left
    Column,
}

impl Span {
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            '^' => Some(Span::Row),
            '{' => Some(Span::Column),
            _ => None,
        }
    }

    pub fn token(&self) -> char {
        match self {
            Span::Row => '^',
            Span::Column => '{',
        }
    }
}

/// One formatting instruction, without the repeat flag
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Modifier {
    Align(Alignment),
    Span(Span),
    /// CSS class name, without the leading dot
    Class(String),
    Heading,
}

/// A modifier as written in the source, possibly followed by `...` or `…`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    pub modifier: Modifier,
    /// Applies to every later column of the same row as well
    pub repeat: bool,
}

impl Annotation {
    pub fn new(modifier: Modifier) -> Self {
        Annotation {
            modifier,
            repeat: false,
        }
    }

    pub fn repeated(modifier: Modifier) -> Self {
        Annotation {
            modifier,
            repeat: true,
        }
    }
}

/// Effective style of a column default or a cell
///
/// Formats are never edited in place: [`Format::merge`] derives a new value
/// from a base plus annotations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Format {
    pub alignment: Alignment,
    pub span: Option<Span>,
    pub heading: bool,
    pub css_classes: Vec<String>,
}

/// Result of a merge: the new format, plus the modifiers that were marked to
/// repeat and must be handed to the columns to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub format: Format,
    pub propagate: Vec<Modifier>,
}

impl Format {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a new format from `self`.
    ///
    /// `inherited` are the modifiers propagated from earlier columns of the
    /// same row; they are applied first so that the column's own annotations
    /// win. Scalars take the last value given, classes accumulate.
    pub fn merge(&self, inherited: &[Modifier], own: &[Annotation]) -> Merged {
        let mut format = self.clone();
        let mut propagate = Vec::new();

        for modifier in inherited {
            format.apply(modifier);
        }

        for annotation in own {
            if annotation.repeat {
                propagate.push(annotation.modifier.clone());
            }
            format.apply(&annotation.modifier);
        }

        Merged { format, propagate }
    }

    fn apply(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Align(alignment) => self.alignment = *alignment,
            Modifier::Span(span) => self.span = Some(*span),
            Modifier::Class(name) => self.css_classes.push(name.clone()),
            Modifier::Heading => self.heading = true,
        }
    }

    pub fn is_span(&self, span: Span) -> bool {
        self.span == Some(span)
    }
}
