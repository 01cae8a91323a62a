mod asset_upload;
mod category_table;
mod city_table;
mod loading;
mod nav;
mod search_box;
mod service_table;
mod toast;
mod user_table;

pub use asset_upload::AssetUpload;
pub use category_table::CategoryTable;
pub use city_table::CityTable;
pub use loading::Loading;
pub use nav::Nav;
pub use search_box::SearchBox;
pub use service_table::ServiceTable;
pub use toast::{ToastContainer, ToastProvider, use_toasts};
pub use user_table::UserTable;
