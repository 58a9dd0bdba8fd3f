use crate::domain::catalog::{NewProduct, Product};
use crate::domain::errors::{DomainError, Entity};
use crate::domain::ports::ProductRepository;

use super::{logged, validation};

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_products(&self, limit: i64) -> Result<Vec<Product>, DomainError> {
        validation::positive(limit, "limit").map_err(|e| logged("list_products", e))?;
        self.repo.list(limit).map_err(|e| logged("list_products", e))
    }

    pub fn get_product(&self, id: i32) -> Result<Product, DomainError> {
        validation::positive(id.into(), "productId").map_err(|e| logged("get_product", e))?;
        self.repo
            .find_by_id(id)
            .and_then(|p| p.ok_or_else(|| DomainError::not_found(Entity::Product, id)))
            .map_err(|e| logged("get_product", e))
    }

    pub fn add_product(&self, product: NewProduct) -> Result<i32, DomainError> {
        validation::new_product(&product).map_err(|e| logged("add_product", e))?;
        self.repo
            .create(product)
            .map_err(|e| logged("add_product", e))
    }

    pub fn delete_product(&self, id: i32) -> Result<(), DomainError> {
        validation::positive(id.into(), "productId").map_err(|e| logged("delete_product", e))?;
        self.repo
            .delete(id)
            .map_err(|e| logged("delete_product", e))
    }
}
