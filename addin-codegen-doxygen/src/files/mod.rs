mod all_docs;
mod category_docs;
mod enumeration_docs;

pub use all_docs::AllDocs;
pub use category_docs::CategoryDocs;
pub use enumeration_docs::EnumerationDocs;
