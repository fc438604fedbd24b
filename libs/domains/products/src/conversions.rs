//! Field-for-field mapping between [`entity::Model`] and [`ProductDto`].
//!
//! The functions are total: an absent input maps to the zero value
//! (`id == 0`). Lists are mapped element by element into a new vector.

use sea_orm::ActiveValue::{NotSet, Set};

use crate::entity;
use crate::models::ProductDto;

impl From<entity::Model> for ProductDto {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
            category_name: model.category_name,
            image_url: model.image_url,
        }
    }
}

impl From<ProductDto> for entity::Model {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            description: dto.description,
            category_name: dto.category_name,
            image_url: dto.image_url,
        }
    }
}

pub fn entity_to_dto(entity: Option<entity::Model>) -> ProductDto {
    entity.map(ProductDto::from).unwrap_or_default()
}

pub fn dto_to_entity(dto: Option<ProductDto>) -> entity::Model {
    dto.map(entity::Model::from).unwrap_or_default()
}

pub fn entities_to_dtos(entities: Vec<entity::Model>) -> Vec<ProductDto> {
    entities.into_iter().map(ProductDto::from).collect()
}

pub fn dtos_to_entities(dtos: Vec<ProductDto>) -> Vec<entity::Model> {
    dtos.into_iter().map(entity::Model::from).collect()
}

/// Insert shape: the store assigns the id, whatever the caller sent
pub fn insert_model(dto: ProductDto) -> entity::ActiveModel {
    let model = dto_to_entity(Some(dto));
    entity::ActiveModel {
        id: NotSet,
        name: Set(model.name),
        price: Set(model.price),
        description: Set(model.description),
        category_name: Set(model.category_name),
        image_url: Set(model.image_url),
    }
}

/// Full-replace shape keyed by `dto.id`; every column is written
pub fn update_model(dto: ProductDto) -> entity::ActiveModel {
    let model = dto_to_entity(Some(dto));
    entity::ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        price: Set(model.price),
        description: Set(model.description),
        category_name: Set(model.category_name),
        image_url: Set(model.image_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample(id: i64, name: &str) -> ProductDto {
        ProductDto {
            id,
            name: name.to_string(),
            price: Decimal::new(1250, 2),
            description: Some("A sturdy product".to_string()),
            category_name: Some("Hardware".to_string()),
            image_url: Some("https://cdn.example.com/p.png".to_string()),
        }
    }

    #[test]
    fn test_dto_entity_dto_preserves_every_field() {
        let dto = sample(7, "Hammer");
        let back = entity_to_dto(Some(dto_to_entity(Some(dto.clone()))));
        assert_eq!(back, dto);
    }

    #[test]
    fn test_absent_inputs_map_to_zero_values() {
        let dto = entity_to_dto(None);
        assert_eq!(dto.id, 0);
        assert_eq!(dto, ProductDto::default());

        let entity = dto_to_entity(None);
        assert_eq!(entity.id, 0);
        assert_eq!(entity, entity::Model::default());
    }

    #[test]
    fn test_list_conversions_keep_order_and_count() {
        assert!(entities_to_dtos(Vec::new()).is_empty());
        assert!(dtos_to_entities(Vec::new()).is_empty());

        let dtos = vec![sample(3, "c"), sample(1, "a"), sample(2, "b")];
        let entities = dtos_to_entities(dtos.clone());
        assert_eq!(entities.len(), 3);
        assert_eq!(
            entities.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );

        assert_eq!(entities_to_dtos(entities), dtos);
    }

    #[test]
    fn test_insert_model_leaves_id_to_the_store() {
        let active = insert_model(sample(99, "Saw"));
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Saw".to_string()));
    }

    #[test]
    fn test_update_model_sets_every_column() {
        let active = update_model(sample(5, "Drill"));
        assert_eq!(active.id, Set(5));
        assert_eq!(active.price, Set(Decimal::new(1250, 2)));
        assert_eq!(active.image_url, Set(Some("https://cdn.example.com/p.png".to_string())));
    }
}
