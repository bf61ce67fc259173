use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque 128-bit identifier of an interface contract or a concrete class.
///
/// Laid out like a conventional GUID: one 32-bit field, two 16-bit fields and
/// eight single bytes. Ids are assigned once by whatever produced the type table
/// and are only ever compared for exact equality; nothing in this workspace
/// derives, hashes into, or regenerates an id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId {
	data1: u32,
	data2: u16,
	data3: u16,
	data4: [u8; 8],
}

impl InterfaceId {
	/// The all-zero id. Never a valid registered identity.
	pub const NIL: Self = Self::from_fields(0, 0, 0, [0; 8]);

	/// Builds an id from its four GUID fields.
	pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
		Self {
			data1,
			data2,
			data3,
			data4,
		}
	}

	/// Builds an id from 16 bytes in textual (big-endian field) order.
	pub const fn from_bytes(b: [u8; 16]) -> Self {
		Self {
			data1: u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
			data2: u16::from_be_bytes([b[4], b[5]]),
			data3: u16::from_be_bytes([b[6], b[7]]),
			data4: [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
		}
	}

	/// Returns the 16 bytes in textual (big-endian field) order.
	pub const fn to_bytes(self) -> [u8; 16] {
		let d1 = self.data1.to_be_bytes();
		let d2 = self.data2.to_be_bytes();
		let d3 = self.data3.to_be_bytes();
		let d4 = self.data4;
		[
			d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
			d4[4], d4[5], d4[6], d4[7],
		]
	}

	/// Returns the four GUID fields.
	pub const fn fields(self) -> (u32, u16, u16, [u8; 8]) {
		(self.data1, self.data2, self.data3, self.data4)
	}

	/// Returns true for [`InterfaceId::NIL`].
	pub const fn is_nil(self) -> bool {
		self.data1 == 0 && self.data2 == 0 && self.data3 == 0 && u64::from_be_bytes(self.data4) == 0
	}
}

impl fmt::Display for InterfaceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let d = self.data4;
		write!(
			f,
			"{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
			self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
		)
	}
}

impl fmt::Debug for InterfaceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "InterfaceId({self})")
	}
}

/// Error returned when parsing a textual interface id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
	#[error("interface id has an opening or closing brace without its pair")]
	UnbalancedBraces,
	#[error("interface id must have 36 characters between braces, found {len}")]
	Length { len: usize },
	#[error("expected '-' at position {position}")]
	MissingDash { position: usize },
	#[error("invalid hex digit at position {position}")]
	InvalidDigit { position: usize },
}

/// Positions of the group separators in `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`.
const DASHES: [usize; 4] = [8, 13, 18, 23];

impl FromStr for InterfaceId {
	type Err = ParseIdError;

	/// Parses `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`, braces optional, hex digits in either case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let body = match (s.strip_prefix('{'), s.ends_with('}')) {
			(Some(rest), true) => &rest[..rest.len() - 1],
			(None, false) => s,
			_ => return Err(ParseIdError::UnbalancedBraces),
		};
		if body.len() != 36 {
			return Err(ParseIdError::Length { len: body.len() });
		}

		let mut bytes = [0u8; 16];
		let mut nibble = 0usize;
		for (position, &c) in body.as_bytes().iter().enumerate() {
			if DASHES.contains(&position) {
				if c != b'-' {
					return Err(ParseIdError::MissingDash { position });
				}
				continue;
			}
			let v = hex_value(c).ok_or(ParseIdError::InvalidDigit { position })?;
			bytes[nibble / 2] |= if nibble % 2 == 0 { v << 4 } else { v };
			nibble += 1;
		}
		Ok(Self::from_bytes(bytes))
	}
}

fn hex_value(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

impl Serialize for InterfaceId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for InterfaceId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(D::Error::custom)
	}
}
