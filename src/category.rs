//! Package categories and their per-category conventions.

use std::fmt;

/// Kind of installable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Command-line package.
    Formula,
    /// GUI application installed with `--cask`.
    Cask,
}

impl Category {
    /// Singular noun used in prompts and messages.
    pub(crate) fn noun(self) -> &'static str {
        match self {
            Self::Formula => "formula",
            Self::Cask => "cask",
        }
    }

    /// JSON field holding the identifier in this category's catalog.
    pub(crate) fn catalog_key(self) -> &'static str {
        match self {
            Self::Formula => "name",
            Self::Cask => "token",
        }
    }

    /// Extra flag passed to `brew install`, if any.
    pub(crate) fn install_flag(self) -> Option<&'static str> {
        match self {
            Self::Formula => None,
            Self::Cask => Some("--cask"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn casks_use_flag_and_token() {
        assert_eq!(Category::Cask.install_flag(), Some("--cask"));
        assert_eq!(Category::Cask.catalog_key(), "token");
    }

    #[test]
    fn formulas_have_no_flag() {
        assert_eq!(Category::Formula.install_flag(), None);
        assert_eq!(Category::Formula.catalog_key(), "name");
        assert_eq!(Category::Formula.to_string(), "formula");
    }
}
