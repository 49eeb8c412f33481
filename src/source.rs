//! The boundary through which receipt records are fetched.
//!
//! The engine never talks to a database or HTTP API directly; callers hand
//! it a [`ReceiptSource`] and the batch pipeline pulls records through it
//! one id at a time.

use async_trait::async_trait;
use thiserror::Error;

use orderslip_types::ReceiptRecord;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("order {id} not found")]
    NotFound { id: String },
    #[error("not authorized to read order {id}")]
    Unauthorized { id: String },
    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait ReceiptSource: Send + Sync {
    async fn fetch_receipt(&self, id: &str) -> Result<ReceiptRecord, FetchError>;
}
