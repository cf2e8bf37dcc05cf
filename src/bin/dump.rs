use exifpeek::{ExifDictionary, Result, image_path};

use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = image_path(&args)?;

    let exif = ExifDictionary::from_file(path)?;

    let mut fields: Vec<_> = exif.fields().collect();
    fields.sort_by_key(|(name, _)| *name);

    for (name, value) in fields {
	println!("{} {}", name, value);
    }

    Ok(())
}
