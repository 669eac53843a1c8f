pub mod dogs;
pub mod hubs;

pub use dogs::DogStore;
pub use hubs::HubStore;
