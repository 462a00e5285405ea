// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::dtos::ContactsError;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The cached contact list was loaded, changed or emptied.
    ContactListChanged,

    /// The live synchronization of the contact list ended with an error.
    ContactsSyncFailed { error: ContactsError },

    /// A user signed in or out.
    SessionChanged,
}
