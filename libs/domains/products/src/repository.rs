use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::conversions::{dto_to_entity, entities_to_dtos, entity_to_dto};
use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::ProductDto;

/// Repository trait for Product persistence
///
/// Absence is `None` / `Ok(false)`; storage faults are `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by id
    async fn find_all(&self) -> ProductResult<Vec<ProductDto>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<ProductDto>>;

    /// Insert, ignoring `product.id`; returns the stored row
    async fn create(&self, product: ProductDto) -> ProductResult<ProductDto>;

    /// Replace the row with `product.id`; `NotFound` when there is none
    async fn update(&self, product: ProductDto) -> ProductResult<ProductDto>;

    /// `Ok(true)` when a row was removed, `Ok(false)` when none matched
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, entity::Model>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<ProductDto>> {
        let products = self.products.read().await;
        Ok(entities_to_dtos(products.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<ProductDto>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned().map(ProductDto::from))
    }

    async fn create(&self, product: ProductDto) -> ProductResult<ProductDto> {
        let mut entity = dto_to_entity(Some(product));
        entity.id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let mut products = self.products.write().await;
        products.insert(entity.id, entity.clone());

        tracing::info!(product_id = entity.id, "Created product");
        Ok(entity_to_dto(Some(entity)))
    }

    async fn update(&self, product: ProductDto) -> ProductResult<ProductDto> {
        let entity = dto_to_entity(Some(product));
        let mut products = self.products.write().await;

        let slot = products
            .get_mut(&entity.id)
            .ok_or(ProductError::NotFound(entity.id))?;
        *slot = entity.clone();

        tracing::info!(product_id = entity.id, "Updated product");
        Ok(entity_to_dto(Some(entity)))
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
