//! Catalog products, including filtered search.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/products` | No | Search with optional filters |
//! | GET | `/api/products/{id}` | No | Get a product |
//! | POST | `/api/products` | Admin | Create a product |
//! | PUT | `/api/products/{id}` | Admin | Replace a product |
//! | DELETE | `/api/products/{id}` | Admin | Delete with cart cleanup |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
