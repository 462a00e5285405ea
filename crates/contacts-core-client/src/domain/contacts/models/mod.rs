// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact::{Contact, ContactId};
pub use errors::{ContactValidationError, ContactsError};
pub use live_sync::LiveSync;

mod contact;
mod errors;
mod live_sync;
