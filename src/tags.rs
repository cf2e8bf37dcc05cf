use lazy_static::lazy_static;
use std::collections::HashMap;

/*
Standard Exif tag ids mapped to their conventional names. Raw fields
whose id is not listed here are dropped when building the dictionary.
 */
lazy_static! {
    static ref TAG_NAMES: HashMap<u16, &'static str> = HashMap::from([
	(0x0100, "ImageWidth"),
	(0x0101, "ImageLength"),
	(0x0102, "BitsPerSample"),
	(0x0103, "Compression"),
	(0x0106, "PhotometricInterpretation"),
	(0x010e, "ImageDescription"),
	(0x010f, "Make"),
	(0x0110, "Model"),
	(0x0112, "Orientation"),
	(0x0115, "SamplesPerPixel"),
	(0x011a, "XResolution"),
	(0x011b, "YResolution"),
	(0x011c, "PlanarConfiguration"),
	(0x0128, "ResolutionUnit"),
	(0x0131, "Software"),
	(0x0132, "DateTime"),
	(0x013b, "Artist"),
	(0x013e, "WhitePoint"),
	(0x013f, "PrimaryChromaticities"),
	(0x0211, "YCbCrCoefficients"),
	(0x0213, "YCbCrPositioning"),
	(0x0214, "ReferenceBlackWhite"),
	(0x8298, "Copyright"),
	(0x829a, "ExposureTime"),
	(0x829d, "FNumber"),
	(0x8822, "ExposureProgram"),
	(0x8825, "GPSInfo"),
	(0x8827, "ISOSpeedRatings"),
	(0x8830, "SensitivityType"),
	(0x9000, "ExifVersion"),
	(0x9003, "DateTimeOriginal"),
	(0x9004, "DateTimeDigitized"),
	(0x9101, "ComponentsConfiguration"),
	(0x9102, "CompressedBitsPerPixel"),
	(0x9201, "ShutterSpeedValue"),
	(0x9202, "ApertureValue"),
	(0x9203, "BrightnessValue"),
	(0x9204, "ExposureBiasValue"),
	(0x9205, "MaxApertureValue"),
	(0x9206, "SubjectDistance"),
	(0x9207, "MeteringMode"),
	(0x9208, "LightSource"),
	(0x9209, "Flash"),
	(0x920a, "FocalLength"),
	(0x9286, "UserComment"),
	(0x9290, "SubsecTime"),
	(0x9291, "SubsecTimeOriginal"),
	(0x9292, "SubsecTimeDigitized"),
	(0xa000, "FlashPixVersion"),
	(0xa001, "ColorSpace"),
	(0xa002, "ExifImageWidth"),
	(0xa003, "ExifImageHeight"),
	(0xa004, "RelatedSoundFile"),
	(0xa20e, "FocalPlaneXResolution"),
	(0xa20f, "FocalPlaneYResolution"),
	(0xa210, "FocalPlaneResolutionUnit"),
	(0xa217, "SensingMethod"),
	(0xa300, "FileSource"),
	(0xa301, "SceneType"),
	(0xa401, "CustomRendered"),
	(0xa402, "ExposureMode"),
	(0xa403, "WhiteBalance"),
	(0xa404, "DigitalZoomRatio"),
	(0xa405, "FocalLengthIn35mmFilm"),
	(0xa406, "SceneCaptureType"),
	(0xa407, "GainControl"),
	(0xa408, "Contrast"),
	(0xa409, "Saturation"),
	(0xa40a, "Sharpness"),
	(0xa420, "ImageUniqueID"),
	(0xa432, "LensSpecification"),
	(0xa433, "LensMake"),
	(0xa434, "LensModel"),
    ]);
}

pub fn tag_name(id: u16) -> Option<&'static str> {
    TAG_NAMES.get(&id).copied()
}

#[cfg(test)]
mod tests {
    use crate::tags::tag_name;

    #[test]
    fn known_tags() {
	assert_eq!(tag_name(0x010e), Some("ImageDescription"));
	assert_eq!(tag_name(0x9286), Some("UserComment"));
    }

    #[test]
    fn unknown_tag() {
	assert_eq!(tag_name(0x9999), None);
    }

    // The windows-specific XP* fields stay out of the table entirely
    #[test]
    fn xp_tags_not_mapped() {
	assert_eq!(tag_name(0x9c9c), None);
	assert_eq!(tag_name(0x9c9e), None);
    }
}
