//! Remote persistence for submitted predictions.

/// Supabase PostgREST client.
pub mod supabase;

pub use supabase::SupabaseStore;

use std::future::Future;

use crate::{error::StoreError, record::SubmissionRecord};

/// Insert-only sink for prediction records.
///
/// Implementations report any non-success as an error; callers do not
/// distinguish between error kinds.
pub trait PredictionStore: Send + Sync {
    /// Write one record. All-or-nothing.
    fn insert(
        &self,
        record: &SubmissionRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
