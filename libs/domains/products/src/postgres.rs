use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    conversions::{entities_to_dtos, insert_model, update_model},
    entity,
    error::{ProductError, ProductResult},
    models::ProductDto,
    repository::ProductRepository,
};

/// SeaORM-backed repository. Each call is a single auto-committed statement.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<ProductDto>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities_to_dtos(models))
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<ProductDto>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(ProductDto::from))
    }

    async fn create(&self, product: ProductDto) -> ProductResult<ProductDto> {
        let model = insert_model(product).insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: ProductDto) -> ProductResult<ProductDto> {
        let id = product.id;

        match update_model(product).update(&self.db).await {
            Ok(model) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(model.into())
            }
            Err(DbErr::RecordNotUpdated) => Err(ProductError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(deleted)
    }
}
