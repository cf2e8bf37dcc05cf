use exifpeek::{ExifDictionary, Result, image_path};

use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = image_path(&args)?;

    let exif = ExifDictionary::from_file(path)?;

    println!("{}", exif.description()?);
    println!("{}", String::from_utf8_lossy(&exif.user_comment()?));

    Ok(())
}
