//! Cloud Storage bucket teardown via the GCS SDK client
//!
//! The bucket lookup distinguishes a 404 "not found" response from every
//! other failure kind. Permission or network failures propagate instead of
//! being conflated with non-existence.

use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::Error as GcsError;
use google_cloud_storage::http::buckets::delete::DeleteBucketRequest;
use google_cloud_storage::http::buckets::get::GetBucketRequest;
use google_cloud_storage::http::objects::delete::DeleteObjectRequest;
use google_cloud_storage::http::objects::list::ListObjectsRequest;

use crate::error::{Result, TeardownError};

/// Authenticated handle to one bucket
///
/// The SDK client is async; the handle owns a runtime that drives it so
/// callers stay synchronous like the rest of the CLI.
pub struct BucketHandle {
    runtime: tokio::runtime::Runtime,
    client: Client,
    bucket: String,
}

impl BucketHandle {
    /// Build an authenticated client for `bucket` in `project`
    pub fn connect(project: &str, bucket: &str) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let client = runtime.block_on(async {
            let mut config = ClientConfig::default().with_auth().await.map_err(|e| {
                TeardownError::StorageClientFailed {
                    bucket: bucket.to_string(),
                    reason: e.to_string(),
                }
            })?;
            config.project_id = Some(project.to_string());
            Ok::<_, TeardownError>(Client::new(config))
        })?;

        Ok(Self {
            runtime,
            client,
            bucket: bucket.to_string(),
        })
    }

    /// True if the bucket exists
    ///
    /// A 404 lookup response means it does not; any other failure
    /// propagates as [`TeardownError::StorageClientFailed`].
    pub fn exists(&self) -> Result<bool> {
        self.runtime.block_on(async {
            match self
                .client
                .get_bucket(&GetBucketRequest {
                    bucket: self.bucket.clone(),
                    ..Default::default()
                })
                .await
            {
                Ok(_) => Ok(true),
                Err(e) if is_not_found(&e) => Ok(false),
                Err(e) => Err(TeardownError::StorageClientFailed {
                    bucket: self.bucket.clone(),
                    reason: e.to_string(),
                }),
            }
        })
    }

    /// Delete the bucket together with every object in it
    pub fn force_delete(&self) -> Result<()> {
        self.runtime.block_on(async {
            delete_all_objects(&self.client, &self.bucket).await?;

            self.client
                .delete_bucket(&DeleteBucketRequest {
                    bucket: self.bucket.clone(),
                    ..Default::default()
                })
                .await
                .map_err(|e| TeardownError::BucketDeleteFailed {
                    bucket: self.bucket.clone(),
                    reason: e.to_string(),
                })
        })
    }
}

/// Delete every object in the bucket, following listing pagination
async fn delete_all_objects(client: &Client, bucket: &str) -> Result<()> {
    let mut page_token: Option<String> = None;

    loop {
        let response = client
            .list_objects(&ListObjectsRequest {
                bucket: bucket.to_string(),
                page_token: page_token.clone(),
                ..Default::default()
            })
            .await
            .map_err(|e| TeardownError::BucketDeleteFailed {
                bucket: bucket.to_string(),
                reason: format!("failed to list objects: {e}"),
            })?;

        for object in response.items.unwrap_or_default() {
            client
                .delete_object(&DeleteObjectRequest {
                    bucket: bucket.to_string(),
                    object: object.name.clone(),
                    ..Default::default()
                })
                .await
                .map_err(|e| TeardownError::BucketDeleteFailed {
                    bucket: bucket.to_string(),
                    reason: format!("failed to delete object '{}': {e}", object.name),
                })?;
        }

        page_token = response.next_page_token;
        if page_token.is_none() {
            break;
        }
    }

    Ok(())
}

fn is_not_found(err: &GcsError) -> bool {
    matches!(err, GcsError::Response(response) if response.code == 404)
}
