// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::UserId;

/// The cached contact list together with the user it belongs to. Every rebinding bumps the
/// generation so that long-running consumers can detect that they're outdated.
pub(super) struct ContactListState {
    binding: RwLock<Binding>,
    contacts: watch::Sender<Vec<Contact>>,
}

#[derive(Default)]
struct Binding {
    user_id: Option<UserId>,
    generation: u64,
    latest_load: u64,
}

impl Binding {
    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation == ticket.generation && self.latest_load == ticket.load
    }
}

/// Identifies a load request. Only the most recently started load may bind the list and only
/// if the list wasn't rebound while it was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct LoadTicket {
    generation: u64,
    load: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Reconciliation {
    Changed,
    Unchanged,
    /// The list was rebound or cleared while the request was in flight.
    Stale,
}

impl Default for ContactListState {
    fn default() -> Self {
        let (contacts, _) = watch::channel(vec![]);
        Self {
            binding: Default::default(),
            contacts,
        }
    }
}

impl ContactListState {
    pub fn user_id(&self) -> Option<UserId> {
        self.binding.read().user_id.clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Contact>> {
        self.contacts.subscribe()
    }

    pub fn begin_load(&self) -> LoadTicket {
        let mut binding = self.binding.write();
        binding.latest_load += 1;
        LoadTicket {
            generation: binding.generation,
            load: binding.latest_load,
        }
    }

    /// Binds the list to `user_id` and replaces its contents with the result of the load
    /// identified by `ticket`.
    pub fn bind(
        &self,
        ticket: LoadTicket,
        user_id: UserId,
        contacts: Vec<Contact>,
    ) -> Reconciliation {
        let mut binding = self.binding.write();
        if !binding.is_current(ticket) {
            return Reconciliation::Stale;
        }
        binding.user_id = Some(user_id);
        binding.generation += 1;
        self.contacts.send_replace(contacts);
        Reconciliation::Changed
    }

    /// Empties the list after the load identified by `ticket` failed.
    pub fn abandon_load(&self, ticket: LoadTicket) -> Reconciliation {
        let mut binding = self.binding.write();
        if !binding.is_current(ticket) {
            return Reconciliation::Stale;
        }
        if self.clear(&mut binding) {
            Reconciliation::Changed
        } else {
            Reconciliation::Unchanged
        }
    }

    /// Binds the list to `user_id` without knowing its contents yet. The list is emptied if it
    /// belonged to someone else. Returns the new generation and whether the list changed.
    pub fn rebind(&self, user_id: UserId) -> (u64, bool) {
        let mut binding = self.binding.write();
        let is_same_user = binding.user_id.as_ref() == Some(&user_id);
        binding.user_id = Some(user_id);
        binding.generation += 1;

        let changed = !is_same_user
            && self.contacts.send_if_modified(|contacts| {
                let was_empty = contacts.is_empty();
                contacts.clear();
                !was_empty
            });

        (binding.generation, changed)
    }

    /// Empties the list and forgets the user. Returns true if the list changed.
    pub fn unbind(&self) -> bool {
        let mut binding = self.binding.write();
        self.clear(&mut binding)
    }

    /// Applies `apply` to the list if it still belongs to `user_id`. `apply` returns true if it
    /// modified the list.
    pub fn reconcile(
        &self,
        user_id: &UserId,
        apply: impl FnOnce(&mut Vec<Contact>) -> bool,
    ) -> Reconciliation {
        let binding = self.binding.read();
        if binding.user_id.as_ref() != Some(user_id) {
            return Reconciliation::Stale;
        }

        if self.contacts.send_if_modified(apply) {
            Reconciliation::Changed
        } else {
            Reconciliation::Unchanged
        }
    }

    /// Replaces the list if no rebinding happened since `generation`.
    pub fn replace(&self, generation: u64, contacts: Vec<Contact>) -> Reconciliation {
        let binding = self.binding.read();
        if binding.generation != generation {
            return Reconciliation::Stale;
        }

        if self.contacts.send_if_modified(|current| {
            if *current == contacts {
                return false;
            }
            *current = contacts;
            true
        }) {
            Reconciliation::Changed
        } else {
            Reconciliation::Unchanged
        }
    }
}

impl ContactListState {
    fn clear(&self, binding: &mut Binding) -> bool {
        binding.user_id = None;
        binding.generation += 1;
        self.contacts.send_if_modified(|contacts| {
            let was_empty = contacts.is_empty();
            contacts.clear();
            !was_empty
        })
    }
}
