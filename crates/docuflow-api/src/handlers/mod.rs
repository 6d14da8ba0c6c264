pub mod companies;
pub mod documents;
pub mod validation;
