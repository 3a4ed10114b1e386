pub mod object;
pub mod path;

pub use object::ObjectStore;
