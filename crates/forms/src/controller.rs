use telinv_core::{Draft, DomainResult};

/// What a submitted form resolves to, depending on whether an editing id was
/// armed when the user submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<Id, D> {
    Create(D),
    Update(Id, D),
}

/// Tracks one in-progress create-or-edit form.
///
/// The controller itself does not gate on completeness; the surrounding
/// feature session checks [`Draft::is_complete`] before dispatching a
/// submission, and clears the form only once the mutation is confirmed —
/// a failed submit leaves the draft exactly as entered.
#[derive(Debug, Clone, Default)]
pub struct FormController<Id: Copy, D: Draft> {
    draft: D,
    editing: Option<Id>,
}

impl<Id: Copy, D: Draft> FormController<Id, D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            editing: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Id of the entity being edited, if the form is in update mode.
    pub fn editing(&self) -> Option<Id> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Update one field of the draft by its form name.
    pub fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        self.draft.set_field(name, value)
    }

    /// Copy an existing entity's draft form in and arm update mode.
    pub fn start_edit(&mut self, id: Id, draft: D) {
        self.draft = draft;
        self.editing = Some(id);
    }

    /// Resolve the current form into a create or update submission.
    ///
    /// The form keeps its state; call [`clear`] once the mutation has been
    /// applied.
    ///
    /// [`clear`]: FormController::clear
    pub fn submission(&self) -> Submission<Id, D> {
        match self.editing {
            Some(id) => Submission::Update(id, self.draft.clone()),
            None => Submission::Create(self.draft.clone()),
        }
    }

    /// Reset the draft and drop editing mode (after a confirmed submit, or
    /// when the user abandons the form).
    pub fn clear(&mut self) {
        self.draft.clear();
        self.editing = None;
    }
}
