//! Serialization of BigReal.
//! A number is serialized as its hexadecimal string, which keeps every mantissa bit.

use crate::num::BigReal;
use serde::{Serialize, Serializer};

impl Serialize for BigReal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.xstr())
    }
}
