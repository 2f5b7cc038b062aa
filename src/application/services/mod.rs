/// Catalog Items resource client
pub mod catalog_items;
/// Finances resource client
pub mod finances;
/// Orders resource client
pub mod orders;

pub use crate::application::interfaces::catalog_items::CatalogItemsService;
pub use crate::application::interfaces::finances::FinancesService;
pub use crate::application::interfaces::orders::OrdersService;
pub use crate::application::interfaces::request::{SpApiRequest, SpApiResource};
pub use catalog_items::CatalogItems;
pub use finances::Finances;
pub use orders::Orders;
