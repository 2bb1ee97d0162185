use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::block::{BlockProductParams, BlockProductUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_name::{
    GetProductByNameParams, GetProductByNameUseCase,
};
use business::domain::product::use_cases::update_stock::{SetAmountParams, UpdateStockUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_name_use_case: Arc<dyn GetProductByNameUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    block_use_case: Arc<dyn BlockProductUseCase>,
    update_stock_use_case: Arc<dyn UpdateStockUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_name_use_case: Arc<dyn GetProductByNameUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        block_use_case: Arc<dyn BlockProductUseCase>,
        update_stock_use_case: Arc<dyn UpdateStockUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_name_use_case,
            delete_use_case,
            block_use_case,
            update_stock_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, blocking, and adjusting stock levels of products.
/// Products are addressed by their unique name.
#[OpenApi(prefix_path = "/v1")]
impl ProductApi {
    /// Create a product
    ///
    /// Creates an unblocked product with zero stock and zero minimum.
    /// A product with the same name is replaced.
    #[oai(path = "/create", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams { name: body.0.name };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by name
    #[oai(path = "/products/:name", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_name(&self, name: Path<String>) -> GetProductByNameResponse {
        match self
            .get_by_name_use_case
            .execute(GetProductByNameParams { name: name.0 })
            .await
        {
            Ok(product) => GetProductByNameResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByNameResponse::NotFound(json),
                    _ => GetProductByNameResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:name", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, name: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { name: name.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Block a product
    ///
    /// Blocked products never appear in purchase requirements.
    #[oai(path = "/block/:name", method = "patch", tag = "ApiTags::Products")]
    async fn block_product(&self, name: Path<String>) -> UpdateProductResponse {
        self.block_use_case
            .execute_block(BlockProductParams { name: name.0 })
            .await
            .into()
    }

    /// Unblock a product
    #[oai(path = "/unblock/:name", method = "patch", tag = "ApiTags::Products")]
    async fn unblock_product(&self, name: Path<String>) -> UpdateProductResponse {
        self.block_use_case
            .execute_unblock(BlockProductParams { name: name.0 })
            .await
            .into()
    }

    /// Set the current stock of a product
    #[oai(path = "/current/:name/:amount", method = "patch", tag = "ApiTags::Products")]
    async fn set_current_amount(
        &self,
        name: Path<String>,
        amount: Path<i64>,
    ) -> UpdateProductResponse {
        self.update_stock_use_case
            .set_current_amount(SetAmountParams {
                name: name.0,
                amount: amount.0,
            })
            .await
            .into()
    }

    /// Set the minimum stock of a product
    #[oai(path = "/min/:name/:amount", method = "patch", tag = "ApiTags::Products")]
    async fn set_min_amount(&self, name: Path<String>, amount: Path<i64>) -> UpdateProductResponse {
        self.update_stock_use_case
            .set_min_amount(SetAmountParams {
                name: name.0,
                amount: amount.0,
            })
            .await
            .into()
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByNameResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by every endpoint that mutates a single product.
#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<Result<Product, ProductError>> for UpdateProductResponse {
    fn from(result: Result<Product, ProductError>) -> Self {
        match result {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }
}
