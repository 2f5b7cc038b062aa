/// Catalog Items service interface
pub mod catalog_items;
/// Finances service interface
pub mod finances;
/// Orders service interface
pub mod orders;
/// Request capability shared by the resource clients
pub mod request;
