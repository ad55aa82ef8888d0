/// Edit to one optional task field.
///
/// A plain `Option<T>` cannot tell "leave the due date alone" apart from
/// "remove the due date", so partial updates carry one of these per field.
///
/// ```
/// use taskboard_domain::FieldUpdate;
///
/// let mut due_date = Some("2024-06-01".to_string());
/// FieldUpdate::<String>::NoChange.apply_to(&mut due_date);
/// assert_eq!(due_date.as_deref(), Some("2024-06-01"));
///
/// FieldUpdate::Clear.apply_to(&mut due_date);
/// assert_eq!(due_date, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    /// Remove the current value
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    pub fn is_no_change(&self) -> bool {
        !self.is_change()
    }
}

/// `None` maps to `Clear`, so an absent value removes the field.
impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}
