mod category_functions;
mod category_registration;
mod register_functions;

pub use category_functions::CategoryFunctions;
pub use category_registration::CategoryRegistration;
pub use register_functions::RegisterFunctions;
