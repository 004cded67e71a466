//! Button poses

/// Which parts of the button are showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Nothing visible, the surface is scaled away
    Hidden,
    /// Icon only
    #[default]
    Icon,
    /// Label only
    Label,
    /// Icon followed by label
    IconAndLabel,
}

impl Pose {
    pub const ALL: [Pose; 4] = [Pose::Hidden, Pose::Icon, Pose::Label, Pose::IconAndLabel];

    pub fn shows_icon(self) -> bool {
        matches!(self, Pose::Icon | Pose::IconAndLabel)
    }

    pub fn shows_label(self) -> bool {
        matches!(self, Pose::Label | Pose::IconAndLabel)
    }

    pub fn is_hidden(self) -> bool {
        self == Pose::Hidden
    }
}
