mod tags;
mod metadata;
mod errors;

pub use crate::metadata::{ExifDictionary, TagValue};
pub use crate::tags::tag_name;
pub use crate::errors::{Error, Result, image_path};
