pub mod db;
mod error;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod purchase_requirement {
    pub mod entity;
    pub mod repository;
}
