use std::fmt;

/// Processing stage of the current image.
///
/// Stages only advance one step at a time; crop and restore reset to
/// `Original`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Nothing imported yet.
    #[default]
    None,
    Original,
    Grayscale,
    Binary,
}

impl Stage {
    /// Whether `action` is available at this stage.
    pub fn allows(self, action: Action) -> bool {
        match action {
            Action::Import => true,
            Action::ConvertGrayscale => self == Self::Original,
            Action::Binarize => self == Self::Grayscale,
            Action::Save | Action::Statistics => self == Self::Binary,
            Action::Crop | Action::Restore => self != Self::None,
        }
    }

    /// All actions available at this stage, in [`Action::ALL`] order.
    pub fn allowed_actions(self) -> Vec<Action> {
        Action::ALL
            .iter()
            .copied()
            .filter(|&a| self.allows(a))
            .collect()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Original => write!(f, "Original"),
            Self::Grayscale => write!(f, "Grayscale"),
            Self::Binary => write!(f, "Binary"),
        }
    }
}

/// A user-facing pipeline action, mirroring the front end's buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Import,
    ConvertGrayscale,
    Binarize,
    Save,
    Statistics,
    Crop,
    Restore,
}

impl Action {
    pub const ALL: &[Self] = &[
        Self::Import,
        Self::ConvertGrayscale,
        Self::Binarize,
        Self::Save,
        Self::Statistics,
        Self::Crop,
        Self::Restore,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import => write!(f, "import an image"),
            Self::ConvertGrayscale => write!(f, "convert to grayscale"),
            Self::Binarize => write!(f, "binarize"),
            Self::Save => write!(f, "save the result"),
            Self::Statistics => write!(f, "compute statistics"),
            Self::Crop => write!(f, "crop"),
            Self::Restore => write!(f, "restore the original"),
        }
    }
}
