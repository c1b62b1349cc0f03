//! CRUD endpoints under `/archives`.
//!
//! DESIGN
//! ======
//! Each archive record names its collection through `ArchiveRecord`, so one
//! set of generic calls serves sectors, assets, workers, tools, categories,
//! spare parts and suppliers with typed payloads.

#[cfg(test)]
#[path = "archives_test.rs"]
mod archives_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{ApiClient, Method};
use super::error::ApiError;
use super::types::{
    Asset, AssetInput, Sector, SectorInput, SparePart, SparePartCategory, SparePartCategoryInput, SparePartInput,
    Supplier, SupplierInput, Tool, ToolInput, Worker, WorkerInput,
};

/// A record stored in one `/archives/{collection}` resource.
pub trait ArchiveRecord: DeserializeOwned + 'static {
    /// Path segment after `/archives/`.
    const COLLECTION: &'static str;
    /// Create/update payload.
    type Input: Serialize;
}

impl ArchiveRecord for Sector {
    const COLLECTION: &'static str = "sectors";
    type Input = SectorInput;
}

impl ArchiveRecord for Asset {
    const COLLECTION: &'static str = "assets";
    type Input = AssetInput;
}

impl ArchiveRecord for Worker {
    const COLLECTION: &'static str = "workers";
    type Input = WorkerInput;
}

impl ArchiveRecord for Tool {
    const COLLECTION: &'static str = "tools";
    type Input = ToolInput;
}

impl ArchiveRecord for SparePartCategory {
    const COLLECTION: &'static str = "categories";
    type Input = SparePartCategoryInput;
}

impl ArchiveRecord for SparePart {
    const COLLECTION: &'static str = "spare-parts";
    type Input = SparePartInput;
}

impl ArchiveRecord for Supplier {
    const COLLECTION: &'static str = "suppliers";
    type Input = SupplierInput;
}

fn collection_endpoint<R: ArchiveRecord>() -> String {
    format!("/archives/{}", R::COLLECTION)
}

fn record_endpoint<R: ArchiveRecord>(id: i64) -> String {
    format!("/archives/{}/{id}", R::COLLECTION)
}

impl ApiClient {
    /// List every record in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list<R: ArchiveRecord>(&self) -> Result<Vec<R>, ApiError> {
        self.get(&collection_endpoint::<R>()).await
    }

    /// Create a record and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation message on rejection.
    pub async fn create<R: ArchiveRecord>(&self, input: &R::Input) -> Result<R, ApiError> {
        self.send_json(Method::Post, &collection_endpoint::<R>(), input).await
    }

    /// Replace a record's fields and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns the backend's message when the record is missing or invalid.
    pub async fn update<R: ArchiveRecord>(&self, id: i64, input: &R::Input) -> Result<R, ApiError> {
        self.send_json(Method::Put, &record_endpoint::<R>(id), input).await
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns the backend's message when the record is missing or still
    /// referenced.
    pub async fn remove<R: ArchiveRecord>(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&record_endpoint::<R>(id)).await
    }
}
