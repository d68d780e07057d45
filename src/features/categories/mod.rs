//! Catalog categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List all categories |
//! | GET | `/api/categories/{id}` | No | Get a category |
//! | GET | `/api/categories/{id}/products` | No | Products of a category |
//! | POST | `/api/categories` | Admin | Create a category |
//! | PUT | `/api/categories/{id}` | Admin | Replace a category |
//! | DELETE | `/api/categories/{id}` | Admin | Cascading delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use handlers::CategoriesState;
pub use services::CategoryService;
