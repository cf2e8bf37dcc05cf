use crate::errors::{Error, Result};
use crate::tags::tag_name;

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;

/// One decoded Exif value. The wire format is heterogeneous, so the
/// dictionary carries an enum instead of a single value type.
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    Text(String),
    Bytes(Vec<u8>),
    UInt(Vec<u32>),
    Int(Vec<i64>),
    Rational(Vec<(u32, u32)>),
    SRational(Vec<(i32, i32)>),
    Float(Vec<f64>),
}

impl TagValue {
    // Fields with an unparsed value (exif::Value::Unknown) carry no
    // data and yield None.
    fn from_raw(value: &exif::Value) -> Option<TagValue> {
	match value {
	    exif::Value::Ascii(lines) => {
		let text = lines.iter()
		    .map(|l| String::from_utf8_lossy(l).into_owned())
		    .collect::<Vec<String>>()
		    .join("\n");
		Some(TagValue::Text(text))
	    },
	    exif::Value::Byte(b) => Some(TagValue::Bytes(b.clone())),
	    exif::Value::Undefined(b, _) => Some(TagValue::Bytes(b.clone())),
	    exif::Value::Short(v) => {
		Some(TagValue::UInt(v.iter().map(|&x| x as u32).collect()))
	    },
	    exif::Value::Long(v) => Some(TagValue::UInt(v.clone())),
	    exif::Value::SByte(v) => {
		Some(TagValue::Int(v.iter().map(|&x| x as i64).collect()))
	    },
	    exif::Value::SShort(v) => {
		Some(TagValue::Int(v.iter().map(|&x| x as i64).collect()))
	    },
	    exif::Value::SLong(v) => {
		Some(TagValue::Int(v.iter().map(|&x| x as i64).collect()))
	    },
	    exif::Value::Rational(v) => {
		Some(TagValue::Rational(
		    v.iter().map(|r| (r.num, r.denom)).collect()))
	    },
	    exif::Value::SRational(v) => {
		Some(TagValue::SRational(
		    v.iter().map(|r| (r.num, r.denom)).collect()))
	    },
	    exif::Value::Float(v) => {
		Some(TagValue::Float(v.iter().map(|&x| x as f64).collect()))
	    },
	    exif::Value::Double(v) => Some(TagValue::Float(v.clone())),
	    exif::Value::Unknown(..) => None,
	}
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
	fn join<T: fmt::Display>(formatter: &mut fmt::Formatter<'_>,
				 items: &[T]) -> fmt::Result {
	    for (i, item) in items.iter().enumerate() {
		if i > 0 {
		    formatter.write_str(", ")?;
		}
		write!(formatter, "{}", item)?;
	    }
	    Ok(())
	}

	match self {
	    TagValue::Text(s) => formatter.write_str(s),
	    TagValue::Bytes(b) => {
		// Hex, the way raw byte fields are usually dumped
		for x in b {
		    write!(formatter, "{:02x}", x)?;
		}
		Ok(())
	    },
	    TagValue::UInt(v) => join(formatter, v),
	    TagValue::Int(v) => join(formatter, v),
	    TagValue::Float(v) => join(formatter, v),
	    TagValue::Rational(v) => {
		for (i, (num, denom)) in v.iter().enumerate() {
		    if i > 0 {
			formatter.write_str(", ")?;
		    }
		    write!(formatter, "{}/{}", num, denom)?;
		}
		Ok(())
	    },
	    TagValue::SRational(v) => {
		for (i, (num, denom)) in v.iter().enumerate() {
		    if i > 0 {
			formatter.write_str(", ")?;
		    }
		    write!(formatter, "{}/{}", num, denom)?;
		}
		Ok(())
	    },
	}
    }
}

/*
The Exif block of an image, keyed by tag name. Built once per run by
filtering the raw primary-image fields through the static tag table;
fields with an id the table does not know are dropped.
 */
#[derive(Debug)]
pub struct ExifDictionary {
    fields: HashMap<String, TagValue>,
}

impl ExifDictionary {
    pub fn from_file(path: &str) -> Result<Self> {
	let file = match File::open(path) {
	    Ok(f) => f,
	    Err(e) => {
		return Err(Error::Decode(
		    path.to_string(), e.to_string()).into());
	    },
	};

	let mut bufreader = BufReader::new(&file);
	let exifreader = exif::Reader::new();
	let raw = match exifreader.read_from_container(&mut bufreader) {
	    Ok(r) => r,
	    Err(exif::Error::NotFound(_)) => {
		return Err(Error::NoExif(path.to_string()).into());
	    },
	    Err(e) => {
		return Err(Error::Decode(
		    path.to_string(), e.to_string()).into());
	    },
	};

	let mut fields = HashMap::new();
	for f in raw.fields() {
	    if f.ifd_num != exif::In::PRIMARY {
		continue;
	    }
	    if let Some(name) = tag_name(f.tag.number()) {
		if let Some(value) = TagValue::from_raw(&f.value) {
		    fields.insert(name.to_string(), value);
		}
	    }
	}

	Ok(Self { fields: fields })
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
	self.fields.get(name)
    }

    pub fn len(&self) -> usize {
	self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
	self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &TagValue)> {
	self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn description(&self) -> Result<String> {
	match self.get("ImageDescription") {
	    Some(TagValue::Text(s)) => Ok(s.clone()),
	    Some(TagValue::Bytes(b)) => {
		Ok(String::from_utf8_lossy(b).into_owned())
	    },
	    Some(v) => Ok(v.to_string()),
	    None => Err(Error::FieldMissing("ImageDescription").into()),
	}
    }

    // The first 8 bytes of a UserComment are an encoding marker
    // ("ASCII\0\0\0", "UNICODE\0", ...). The marker is stripped, not
    // validated; a value shorter than 8 bytes leaves nothing.
    pub fn user_comment(&self) -> Result<Vec<u8>> {
	match self.get("UserComment") {
	    Some(TagValue::Bytes(b)) => {
		Ok(b.get(8..).unwrap_or(&[]).to_vec())
	    },
	    Some(TagValue::Text(s)) => {
		Ok(s.as_bytes().get(8..).unwrap_or(&[]).to_vec())
	    },
	    // A numeric UserComment is malformed; treat it like the
	    // field is not there at all
	    Some(_) => Err(Error::FieldMissing("UserComment").into()),
	    None => Err(Error::FieldMissing("UserComment").into()),
	}
    }
}
