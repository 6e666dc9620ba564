//! Users sub-client — driver account creation.

use crate::client::FleetrClient;
use crate::domain::user::wire::{CreateUserRequest, UserRecord};
use crate::error::SdkError;
use crate::http::RetryPolicy;

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) client: &'a FleetrClient,
}

impl<'a> Users<'a> {
    /// Create a driver account. `POST core/users`.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<UserRecord, SdkError> {
        let url = format!("{}/core/users", self.client.http.base_url());
        self.client
            .http
            .post(&url, request, RetryPolicy::Standard)
            .await
    }
}
