//! Child visuals hosted by the button

use crate::error::ButtonError;
use poise_core::Size;

/// What a child visual draws
#[derive(Clone, Debug, PartialEq)]
pub enum VisualKind {
    /// Named glyph from the host's icon set
    Icon(String),
    /// Text run
    Text(String),
}

/// A host-rendered child with its measured natural size
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    kind: VisualKind,
    size: Size,
}

impl Visual {
    pub fn icon(name: impl Into<String>, size: Size) -> Self {
        Self {
            kind: VisualKind::Icon(name.into()),
            size,
        }
    }

    pub fn text(text: impl Into<String>, size: Size) -> Self {
        Self {
            kind: VisualKind::Text(text.into()),
            size,
        }
    }

    pub fn kind(&self) -> &VisualKind {
        &self.kind
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// The icon/label pair; at least one of them is always present
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    icon: Option<Visual>,
    label: Option<Visual>,
}

impl Content {
    pub fn new(icon: Option<Visual>, label: Option<Visual>) -> Result<Self, ButtonError> {
        if icon.is_none() && label.is_none() {
            return Err(ButtonError::MissingContent);
        }
        Ok(Self { icon, label })
    }

    pub fn icon(&self) -> Option<&Visual> {
        self.icon.as_ref()
    }

    pub fn label(&self) -> Option<&Visual> {
        self.label.as_ref()
    }
}
