//! Address - a point in the Kademlia XOR metric space

use crate::error::AddressError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Number of bytes in an address.
pub const ADDRESS_LENGTH: usize = 32;

/// Number of bits in an address; also the proximity order of an address to itself.
pub const ADDRESS_BITS: usize = ADDRESS_LENGTH * 8;

/// 256-bit identifier in the XOR metric space.
///
/// The length invariant lives in the type: an `Address` always holds exactly
/// [`ADDRESS_LENGTH`] bytes, so the metric functions never see mismatched
/// inputs. Variable-length data is rejected at the boundary by
/// [`Address::from_slice`] and [`Address::from_str`].
///
/// Addresses deliberately do not implement `Ord`. Closeness is always relative
/// to a target, see [`Address::prox_cmp`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Create an address from a raw 32-byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create an address from a byte slice of exactly [`ADDRESS_LENGTH`] bytes.
    ///
    /// # Errors
    ///
    /// `AddressError::InvalidLength` if the slice is shorter or longer.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Consume the address and return its bytes.
    pub fn into_bytes(self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Lowercase hex form, 64 characters, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Binary string form: 8 `'0'`/`'1'` characters per byte, MSB first.
    ///
    /// Diagnostics only.
    pub fn to_bin(&self) -> String {
        let mut out = String::with_capacity(ADDRESS_BITS);
        for byte in &self.0 {
            // Writing to a String cannot fail.
            let _ = write!(out, "{byte:08b}");
        }
        out
    }

    /// Value of bit `index` (0 = MSB of byte 0). Out-of-range indices read as `false`.
    pub fn bit(&self, index: usize) -> bool {
        match self.0.get(index / 8) {
            Some(byte) => (byte >> (7 - index % 8)) & 1 == 1,
            None => false,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse the hex form. A leading `0x`/`0X` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressError::InvalidEncoding(format!(
                "expected {} hex characters, got {}",
                ADDRESS_LENGTH * 2,
                digits.len()
            )));
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LENGTH] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AddressVisitor;

        impl<'de> de::Visitor<'de> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 64 character hex string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Address, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}
