//! Minimal JVM class file reader.
//!
//! Only the header, the constant pool and `this_class` are decoded; that is
//! enough to recover the fully qualified name of the class a file defines.

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

const MAGIC: u32 = 0xCAFE_BABE;

const TAG_UTF8: u8 = 1;
const TAG_INTEGER: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_LONG: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_CLASS: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_FIELD_REF: u8 = 9;
const TAG_METHOD_REF: u8 = 10;
const TAG_INTERFACE_METHOD_REF: u8 = 11;
const TAG_NAME_AND_TYPE: u8 = 12;
const TAG_METHOD_HANDLE: u8 = 15;
const TAG_METHOD_TYPE: u8 = 16;
const TAG_DYNAMIC: u8 = 17;
const TAG_INVOKE_DYNAMIC: u8 = 18;
const TAG_MODULE: u8 = 19;
const TAG_PACKAGE: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassFileError {
    #[error("not a class file (magic 0x{0:08X})")]
    BadMagic(u32),

    #[error("class file truncated at byte {0}")]
    Truncated(usize),

    #[error("unknown constant pool tag {tag} at index {index}")]
    UnknownTag { tag: u8, index: u16 },

    #[error("this_class index {0} does not refer to a class entry")]
    NotAClass(u16),

    #[error("class entry points at index {0}, which is not a UTF-8 entry")]
    MissingName(u16),
}

pub type Result<T> = core::result::Result<T, ClassFileError>;

#[derive(Debug, Clone, Copy)]
enum Constant<'a> {
    /// Index 0, the upper half of long/double entries, and everything we
    /// never need to resolve.
    Unused,
    Utf8(&'a [u8]),
    Class(u16),
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(ClassFileError::Truncated(self.pos))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }
}

/// Fully qualified name of the class defined by `bytes`.
///
/// The internal form `org/pkg/Outer$Inner` is returned as
/// `org.pkg.Outer$Inner`; filtering nested types is left to the caller.
///
/// # Errors
///
/// Fails on a wrong magic number, truncated input, an unknown constant pool
/// tag, or a `this_class` entry that does not resolve to a name.
pub fn parse_class_name(bytes: &[u8]) -> Result<String> {
    let mut cursor = Cursor::new(bytes);

    let magic = cursor.u32()?;
    if magic != MAGIC {
        return Err(ClassFileError::BadMagic(magic));
    }
    // minor_version, major_version
    cursor.skip(4)?;

    let pool = read_constant_pool(&mut cursor)?;

    // access_flags
    cursor.skip(2)?;
    let this_class = cursor.u16()?;

    let name_index = match pool.get(usize::from(this_class)) {
        Some(Constant::Class(name_index)) => *name_index,
        _ => return Err(ClassFileError::NotAClass(this_class)),
    };
    let name = match pool.get(usize::from(name_index)) {
        Some(Constant::Utf8(raw)) => *raw,
        _ => return Err(ClassFileError::MissingName(name_index)),
    };

    Ok(String::from_utf8_lossy(name).replace('/', "."))
}

fn read_constant_pool<'a>(cursor: &mut Cursor<'a>) -> Result<Vec<Constant<'a>>> {
    let count = cursor.u16()?;
    let mut pool = Vec::with_capacity(usize::from(count));
    pool.push(Constant::Unused);

    let mut index: u16 = 1;
    while index < count {
        let tag = cursor.u8()?;
        let constant = match tag {
            TAG_UTF8 => {
                let len = cursor.u16()?;
                Constant::Utf8(cursor.take(usize::from(len))?)
            }
            TAG_CLASS => Constant::Class(cursor.u16()?),
            TAG_STRING | TAG_METHOD_TYPE | TAG_MODULE | TAG_PACKAGE => {
                cursor.skip(2)?;
                Constant::Unused
            }
            TAG_METHOD_HANDLE => {
                cursor.skip(3)?;
                Constant::Unused
            }
            TAG_INTEGER
            | TAG_FLOAT
            | TAG_FIELD_REF
            | TAG_METHOD_REF
            | TAG_INTERFACE_METHOD_REF
            | TAG_NAME_AND_TYPE
            | TAG_DYNAMIC
            | TAG_INVOKE_DYNAMIC => {
                cursor.skip(4)?;
                Constant::Unused
            }
            TAG_LONG | TAG_DOUBLE => {
                cursor.skip(8)?;
                // 8-byte constants occupy two pool slots.
                pool.push(Constant::Unused);
                index = index.saturating_add(1);
                Constant::Unused
            }
            other => return Err(ClassFileError::UnknownTag { tag: other, index }),
        };
        pool.push(constant);
        index = index.saturating_add(1);
    }

    Ok(pool)
}
