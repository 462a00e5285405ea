// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use mock_app_dependencies::{MockAppDependencies, MockContactListDomainServiceDependencies};

mod incrementing_id_provider;
mod mock_app_dependencies;

pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_account_email as account_email, mock_account_id as account_id,
        mock_reference_date as reference_date, mock_session as session,
    };
}

#[macro_export]
macro_rules! user_id {
    ($id:expr) => {
        $crate::dtos::UserId::from($id)
    };
}

#[macro_export]
macro_rules! contact_id {
    ($id:expr) => {
        $crate::dtos::ContactId::from($id)
    };
}
