/// Use cases module containing application business logic orchestration
mod add_item;
mod consume_item;
mod list_items;
mod register_product;
mod seed_demo;

pub use add_item::AddItemUseCase;
pub use consume_item::ConsumeItemUseCase;
pub use list_items::ListItemsUseCase;
pub use register_product::RegisterProductUseCase;
pub use seed_demo::SeedDemoUseCase;
