use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::ProductDto;
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_products(&self) -> ProductResult<Vec<ProductDto>> {
        self.repository.find_all().await
    }

    pub async fn get_product(&self, id: i64) -> ProductResult<ProductDto> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn create_product(&self, input: ProductDto) -> ProductResult<ProductDto> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Full replace of an existing product; unknown ids are `NotFound`
    pub async fn update_product(&self, input: ProductDto) -> ProductResult<ProductDto> {
        input.validate()?;
        self.repository.update(input).await
    }

    /// `true` when the product was removed.
    ///
    /// Storage faults are logged and reported as `false`, same as an
    /// unknown id.
    pub async fn delete_product(&self, id: i64) -> bool {
        match self.repository.delete(id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "Failed to delete product");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use sea_orm::DbErr;

    fn widget(id: i64) -> ProductDto {
        ProductDto {
            id,
            name: "Widget".to_string(),
            price: Decimal::new(999, 2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_product_maps_absence_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(8))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(8).await;

        assert!(matches!(result, Err(ProductError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_get_product_returns_found_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(widget(id))));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.get_product(3).await.unwrap(), widget(3));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_touching_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let invalid = ProductDto {
            price: Decimal::ZERO,
            ..widget(0)
        };

        let result = service.create_product(invalid).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_passes_valid_input_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|dto| Ok(ProductDto { id: 1, ..dto }));

        let service = ProductService::new(mock_repo);
        let created = service.create_product(widget(0)).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let invalid = ProductDto {
            name: String::new(),
            ..widget(4)
        };

        assert!(service.update_product(invalid).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_product_reports_outcome() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(1))
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .with(eq(2))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(1).await);
        assert!(!service.delete_product(2).await);
    }

    #[tokio::test]
    async fn test_delete_product_swallows_storage_fault() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(ProductError::Database(DbErr::Custom("disk full".into()))));

        let service = ProductService::new(mock_repo);
        assert!(!service.delete_product(5).await);
    }
}
