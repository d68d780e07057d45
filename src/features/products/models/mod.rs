mod filter;
mod product;

pub use filter::ProductFilter;
pub use product::Product;
