//! Tenants sub-client — attaching and detaching entities.

use crate::client::FleetrClient;
use crate::domain::tenant::EntityKind;
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::EntityId;

/// Sub-client for tenant association operations.
pub struct Tenants<'a> {
    pub(crate) client: &'a FleetrClient,
}

impl<'a> Tenants<'a> {
    /// Attach an entity to a tenant.
    ///
    /// `POST core/tenants/{tenant}/{kind}` with a `{"<kind>": ["<id>"]}`
    /// body. The endpoint acknowledges with a non-JSON 2xx body, which is
    /// discarded.
    pub async fn associate(
        &self,
        tenant: &EntityId,
        kind: EntityKind,
        entity: &EntityId,
    ) -> Result<(), SdkError> {
        let url = format!(
            "{}/core/tenants/{}/{}",
            self.client.http.base_url(),
            tenant,
            kind.plural()
        );
        let body = serde_json::json!({ kind.plural(): [entity] });
        self.client
            .http
            .post_expect_ok(&url, &body, RetryPolicy::Standard)
            .await
    }

    /// Detach an entity from a tenant.
    ///
    /// `DELETE core/tenants/{tenant}/{kind}/{entity}`; the response body is
    /// discarded the same way.
    pub async fn dissociate(
        &self,
        tenant: &EntityId,
        kind: EntityKind,
        entity: &EntityId,
    ) -> Result<(), SdkError> {
        let url = format!(
            "{}/core/tenants/{}/{}/{}",
            self.client.http.base_url(),
            tenant,
            kind.plural(),
            entity
        );
        self.client
            .http
            .delete_expect_ok(&url, RetryPolicy::Standard)
            .await
    }
}
