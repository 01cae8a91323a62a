mod categories;
mod cities;
mod not_found;
mod services;
mod users;

pub use categories::Categories;
pub use cities::Cities;
pub use not_found::NotFound;
pub use services::Services;
pub use users::Users;
