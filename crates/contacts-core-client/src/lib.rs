// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::{dtos, services};
pub use client::{Client, ClientDelegate, ClientInner};
pub use client_builder::ClientBuilder;
pub use client_event::ClientEvent;
pub use domain::account::services::AuthenticationService;
pub use domain::general::services::{IDProvider, TimeProvider};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

pub mod infra;
