mod create_all;
mod create_header;
mod create_source;
mod factory;
mod registration;
mod vo_header;
mod vo_source;

pub use create_all::CreateAll;
pub use create_header::CreateHeader;
pub use create_source::CreateSource;
pub use factory::Factory;
pub use registration::{RegisterAll, RegisterFactory, RegisterHeader, RegisterSource};
pub use vo_header::ValueObjectHeader;
pub use vo_source::ValueObjectSource;
