pub mod basis;
pub mod content;
pub mod error;
pub mod model;
pub mod row;
pub mod value;

pub use basis::Basis;
pub use content::is_valid_content;
pub use error::{CompendiumError, Result};
pub use model::{ContentModel, ItemFields, IMAGE_URL_FIELD, ORIGINAL_CATEGORY_FIELD};
pub use row::Row;
pub use value::FieldValue;
