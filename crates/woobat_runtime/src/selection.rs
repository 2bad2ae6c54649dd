//! Checkbox selection semantics.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Value bound to a checkbox.
pub enum CheckboxModel<T> {
    /// Plain boolean.
    Flag(bool),
    /// Custom checked/unchecked values.
    Pair {
        /// Bound value.
        current: T,
        /// Value meaning "checked".
        true_value: T,
        /// Value meaning "unchecked".
        false_value: T,
    },
    /// Membership of `value` in a shared selection list.
    Group {
        /// Selected values, in selection order.
        selected: Vec<T>,
        /// This checkbox's value.
        value: T,
    },
}

impl<T: PartialEq + Clone> CheckboxModel<T> {
    /// Whether the checkbox renders as checked.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Flag(checked) => *checked,
            Self::Pair {
                current,
                true_value,
                ..
            } => current == true_value,
            Self::Group { selected, value } => selected.contains(value),
        }
    }

    /// Whether the checkbox is part of a group.
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Model after one click. Groups add or remove this checkbox's value and keep the order of
    /// the other entries.
    pub fn toggled(&self) -> Self {
        let checked = self.is_checked();
        match self {
            Self::Flag(_) => Self::Flag(!checked),
            Self::Pair {
                true_value,
                false_value,
                ..
            } => Self::Pair {
                current: if checked {
                    false_value.clone()
                } else {
                    true_value.clone()
                },
                true_value: true_value.clone(),
                false_value: false_value.clone(),
            },
            Self::Group { selected, value } => {
                let mut selected = selected.clone();
                match selected.iter().position(|entry| entry == value) {
                    Some(index) => {
                        selected.remove(index);
                    }
                    None => selected.push(value.clone()),
                }
                Self::Group {
                    selected,
                    value: value.clone(),
                }
            }
        }
    }

    /// [`Self::toggled`] unless the checkbox is disabled.
    pub fn toggle_unless_disabled(&self, disabled: bool) -> Option<Self> {
        (!disabled).then(|| self.toggled())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Rendered checkbox state.
pub enum CheckState {
    /// Empty box.
    Unchecked,
    /// Check mark.
    Checked,
    /// Dash; overrides the checked flag.
    Indeterminate,
}

impl CheckState {
    /// Derives the rendered state.
    pub const fn from_flags(checked: bool, indeterminate: bool) -> Self {
        match (indeterminate, checked) {
            (true, _) => Self::Indeterminate,
            (false, true) => Self::Checked,
            (false, false) => Self::Unchecked,
        }
    }

    /// `aria-checked` value.
    pub const fn aria_checked(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Indeterminate => "mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flag_toggles() {
        let model: CheckboxModel<()> = CheckboxModel::Flag(false);
        assert!(!model.is_checked());
        assert!(model.toggled().is_checked());
        assert!(!model.is_grouped());
    }

    #[test]
    fn pair_switches_between_custom_values() {
        let model = CheckboxModel::Pair {
            current: "no",
            true_value: "yes",
            false_value: "no",
        };
        assert!(!model.is_checked());
        let toggled = model.toggled();
        assert!(toggled.is_checked());
        assert_eq!(toggled.toggled(), model);
    }

    #[test]
    fn group_adds_and_removes_its_value() {
        let model = CheckboxModel::Group {
            selected: vec!["red", "blue", "green"],
            value: "blue",
        };
        assert!(model.is_checked());
        assert_eq!(
            model.toggled(),
            CheckboxModel::Group {
                selected: vec!["red", "green"],
                value: "blue",
            }
        );
        assert_eq!(
            model.toggled().toggled(),
            CheckboxModel::Group {
                selected: vec!["red", "green", "blue"],
                value: "blue",
            }
        );
    }

    #[test]
    fn disabled_checkboxes_do_not_toggle() {
        let model: CheckboxModel<u8> = CheckboxModel::Flag(true);
        assert_eq!(model.toggle_unless_disabled(true), None);
        assert_eq!(model.toggle_unless_disabled(false), Some(CheckboxModel::Flag(false)));
    }

    #[test]
    fn indeterminate_overrides_checked() {
        assert_eq!(CheckState::from_flags(true, true).aria_checked(), "mixed");
        assert_eq!(CheckState::from_flags(true, false), CheckState::Checked);
        assert_eq!(CheckState::from_flags(false, false).aria_checked(), "false");
    }
}
