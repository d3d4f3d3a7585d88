pub mod path_id;
pub mod validated_json;

pub use path_id::parse_id;
pub use validated_json::{Payload, ValidatedJson};
