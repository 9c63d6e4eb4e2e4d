pub mod health;
pub mod item_create;
pub mod item_delete;
pub mod item_get;
pub mod item_list;
pub mod item_update;

pub use health::*;
pub use item_create::*;
pub use item_delete::*;
pub use item_get::*;
pub use item_list::*;
pub use item_update::*;
