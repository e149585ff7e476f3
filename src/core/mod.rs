pub mod checksum;
pub mod cnpj;
pub mod cpf;
pub mod engine;
pub mod normalize;

pub use crate::domain::model::{CheckOutcome, DocumentKind};
pub use crate::domain::ports::DocumentValidator;
