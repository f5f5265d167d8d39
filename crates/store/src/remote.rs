//! Remote-authoritative gateway strategy.

use std::marker::PhantomData;

use telinv_core::Entity;

use crate::gateway::{GatewayError, GatewayResult, MutationGateway};

/// REST-backed gateway for one entity collection.
///
/// Paths follow the inventory API surface: `GET/POST {base}/api/{resource}`,
/// `PUT/DELETE {base}/api/{resource}/{id}`. Drafts are materialized into
/// typed bodies ([`Entity::to_body`]) before posting, so numeric fields go
/// out numeric; identifiers are assigned by the server on create. No
/// authentication headers, pagination, or versioning are part of the
/// contract.
#[derive(Debug, Clone)]
pub struct RemoteGateway<E> {
    client: reqwest::Client,
    base_url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RemoteGateway<E> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            _entity: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base_url, E::RESOURCE)
    }

    fn entity_url(&self, id: E::Id) -> String {
        format!("{}/api/{}/{}", self.base_url, E::RESOURCE, id)
    }
}

/// Map a non-success response into [`GatewayError::Api`].
///
/// Shared with sub-resource gateways (supplier orders) that speak to the
/// same API.
pub async fn check_status(resp: reqwest::Response) -> GatewayResult<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(GatewayError::Api(status, body))
}

#[async_trait::async_trait]
impl<E: Entity> MutationGateway<E> for RemoteGateway<E> {
    async fn fetch_all(&self) -> GatewayResult<Vec<E>> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        resp.json::<Vec<E>>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }

    async fn create(&self, draft: &E::Draft) -> GatewayResult<()> {
        let body = E::to_body(draft)?;
        let resp = self
            .client
            .post(self.collection_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        check_status(resp).await?;
        // The server-assigned representation is picked up by the store's
        // refetch; nothing to merge here.
        Ok(())
    }

    async fn update(&self, id: E::Id, draft: &E::Draft) -> GatewayResult<()> {
        let body = E::to_body(draft)?;
        let resp = self
            .client
            .put(self.entity_url(id))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: E::Id) -> GatewayResult<()> {
        let resp = self
            .client
            .delete(self.entity_url(id))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
}
