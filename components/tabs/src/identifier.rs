//! Values that identify a tab.

/// A value that can stand for one tab of a [`TabRow`](crate::TabRow).
///
/// `index` must be unique among the tabs of a row and is the position of the
/// tab's measured bounds; `label` is the text shown in the cell. Two values
/// denote the same tab exactly when their indices are equal.
///
/// Fieldless enums get an implementation from [`tab_enum!`](crate::tab_enum).
pub trait TabIdentifier: Clone + 'static {
    /// Position of the tab in its row.
    fn index(&self) -> usize;
    /// Text shown for the tab.
    fn label(&self) -> &str;
}

/// A tab made from a plain title, used by [`TitledTabRow`](crate::TitledTabRow).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitledTab {
    index: usize,
    label: String,
}

impl TitledTab {
    /// Creates a tab at `index` showing `label`.
    #[must_use]
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

impl TabIdentifier for TitledTab {
    fn index(&self) -> usize {
        self.index
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Declares a fieldless enum usable as a tab identifier.
///
/// The index of each variant is its declaration order and the label is the
/// variant name, unless a string literal overrides it. The enum also gets
/// `ALL`, every variant in order, and derives `Debug`, `Clone`, `Copy`,
/// `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// use tablayout_tabs::{TabIdentifier, tab_enum};
///
/// tab_enum! {
///     /// Sections of a settings screen.
///     pub enum Section {
///         General,
///         Privacy = "Privacy & Security",
///     }
/// }
///
/// assert_eq!(Section::Privacy.index(), 1);
/// assert_eq!(Section::Privacy.label(), "Privacy & Security");
/// assert_eq!(Section::ALL, &[Section::General, Section::Privacy]);
/// ```
#[macro_export]
macro_rules! tab_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(= $label:literal)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl $crate::TabIdentifier for $name {
            fn index(&self) -> usize {
                *self as usize
            }

            fn label(&self) -> &str {
                match self {
                    $( Self::$variant => $crate::tab_enum!(@label $variant $($label)?), )+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    tab_enum! {
        enum Demo {
            Home,
            Profile,
            Settings = "Preferences",
        }
    }

    #[test]
    fn enum_tabs_use_declaration_order() {
        let indices: Vec<usize> = Demo::ALL.iter().map(TabIdentifier::index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn enum_tabs_use_variant_names_unless_overridden() {
        assert_eq!(Demo::Home.label(), "Home");
        assert_eq!(Demo::Profile.label(), "Profile");
        assert_eq!(Demo::Settings.label(), "Preferences");
    }

    #[test]
    fn titled_tabs_keep_their_fields() {
        let tab = TitledTab::new(4, "Inbox");
        assert_eq!(tab.index(), 4);
        assert_eq!(tab.label(), "Inbox");
    }
}
