use crate::core::dom::{NodeId, SharedDocument};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Email,
    FirstName,
    LastName,
}

struct TrackedInput {
    node: NodeId,
    initial: String,
}

/// Enables the confirm button once any field differs from its load-time
/// value. The enable is a latch: reverting the edit does not disable it.
pub struct EditProfileGate {
    document: SharedDocument,
    email: TrackedInput,
    first_name: TrackedInput,
    last_name: TrackedInput,
    confirm: NodeId,
}

impl EditProfileGate {
    pub fn mount(
        document: SharedDocument,
        email: NodeId,
        first_name: NodeId,
        last_name: NodeId,
        confirm: NodeId,
    ) -> Self {
        let track = |node: NodeId| TrackedInput {
            node,
            initial: document.borrow().element(node).value().to_string(),
        };
        let email = track(email);
        let first_name = track(first_name);
        let last_name = track(last_name);

        document.borrow_mut().element_mut(confirm).set_disabled(true);

        EditProfileGate {
            document,
            email,
            first_name,
            last_name,
            confirm,
        }
    }

    fn field(&self, field: ProfileField) -> &TrackedInput {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
        }
    }

    pub fn initial_value(&self, field: ProfileField) -> &str {
        &self.field(field).initial
    }

    pub fn is_confirm_enabled(&self) -> bool {
        !self.document.borrow().element(self.confirm).is_disabled()
    }

    /// An input event on `field`. Returns whether confirm is enabled after it.
    pub fn on_input(&self, field: ProfileField, value: &str) -> bool {
        let tracked = self.field(field);
        let mut doc = self.document.borrow_mut();
        doc.element_mut(tracked.node).set_value(value);

        if value != tracked.initial && doc.element(self.confirm).is_disabled() {
            doc.element_mut(self.confirm).set_disabled(false);
        }
        !doc.element(self.confirm).is_disabled()
    }
}
