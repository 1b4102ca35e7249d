use core::fmt;
use core::ops::Deref;

use crate::tier::MAX_WIDTH;

/// закодированная последовательность UTF-8 (1 - 6 байт, первый байт - ведущий)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence
{
    bytes: [u8; MAX_WIDTH],
    width: u8,
}

impl Sequence
{
    #[inline(always)]
    pub(crate) fn from_parts(bytes: [u8; MAX_WIDTH], width: u8) -> Self
    {
        debug_assert!((1 ..= MAX_WIDTH as u8).contains(&width));

        Self { bytes, width }
    }

    /// количество байт
    #[inline(always)]
    pub fn width(&self) -> usize
    {
        self.width as usize
    }

    /// байты последовательности
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8]
    {
        &self.bytes[.. self.width()]
    }

    /// ведущий байт
    #[inline(always)]
    pub fn leading_byte(&self) -> u8
    {
        self.bytes[0]
    }

    /// последовательность в виде одного числа, байты - big-endian: [0xC2, 0x80] -> 0xC280
    #[inline]
    pub fn packed(&self) -> u64
    {
        pack(self.as_bytes())
    }
}

/// упаковать байты в число (big-endian), вызывающий гарантирует длину не более 8 байт
#[inline]
pub fn pack(bytes: &[u8]) -> u64
{
    bytes.iter().fold(0, |acc, byte| acc << 8 | *byte as u64)
}

impl Deref for Sequence
{
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target
    {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Sequence
{
    fn as_ref(&self) -> &[u8]
    {
        self.as_bytes()
    }
}

impl From<Sequence> for u64
{
    #[inline(always)]
    fn from(value: Sequence) -> Self
    {
        value.packed()
    }
}

/// шестнадцатеричная запись упакованного значения без префикса, например `e282ac`
impl fmt::Display for Sequence
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:x}", self.packed())
    }
}

impl fmt::LowerHex for Sequence
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::LowerHex::fmt(&self.packed(), f)
    }
}

impl fmt::UpperHex for Sequence
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::UpperHex::fmt(&self.packed(), f)
    }
}

impl fmt::Debug for Sequence
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{{ bytes: [")?;

        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }

        write!(f, "], packed: {:#X} }}", self.packed())
    }
}
