mod company;
mod product;

pub use company::{Company, CompanyId, CompanyInput};
pub use product::{Product, ProductId, ProductInput};
