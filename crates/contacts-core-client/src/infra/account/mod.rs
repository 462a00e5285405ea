// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use document_user_profile_repository::DocumentUserProfileRepository;
pub use in_memory_auth_service::InMemoryAuthService;

mod document_user_profile_repository;
mod in_memory_auth_service;
