// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use contacts_utils::id_string;

id_string!(
    /// The opaque identifier of an authenticated user as handed out by the authentication
    /// provider. It also names the user's document in the store.
    UserId
);
