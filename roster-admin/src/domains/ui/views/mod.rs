pub mod notice;
pub mod pagination;
pub mod user_table;

pub use notice::view_notice;
pub use pagination::view_pagination;
pub use user_table::view_user_table;
