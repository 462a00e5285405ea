// contacts-core-client/contacts-utils
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
