use std::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<dyn error::Error>>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Cannot decode '{}': {}", .0, .1)]
    Decode(String, String),
    #[error("No Exif data in '{}'", .0)]
    NoExif(String),
    #[error("Missing Exif field '{}'", .0)]
    FieldMissing(&'static str),
    #[error("Missing image file argument")]
    MissingArgument,
}

// The single positional argument every binary takes. Checked before
// any file is touched.
pub fn image_path(args: &[String]) -> Result<&str> {
    match args.get(1) {
	Some(path) => Ok(path),
	None => Err(Error::MissingArgument.into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{Error, image_path};

    #[test]
    fn path_argument() {
	let args = vec!["print".to_string(), "img.jpg".to_string()];
	assert_eq!(image_path(&args).unwrap(), "img.jpg");
    }

    #[test]
    fn no_path_argument() {
	let args = vec!["print".to_string()];
	let err = image_path(&args).unwrap_err();
	assert_eq!(err.downcast_ref::<Error>(),
		   Some(&Error::MissingArgument));
    }
}
