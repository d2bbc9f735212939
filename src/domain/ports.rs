use super::notification::Notification;
use super::relay::{DonationRequest, RelayResponse};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn submit(&self, request: &DonationRequest) -> Result<RelayResponse>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}

pub type RelayClientBox = Box<dyn RelayClient>;
pub type NotifierBox = Box<dyn Notifier>;
