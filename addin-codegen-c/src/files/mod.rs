mod addin_header;
mod category_header;
mod category_source;

pub use addin_header::AddinHeader;
pub use category_header::CategoryHeader;
pub use category_source::CategorySource;
