//! кодирование кодпоинтов Unicode в UTF-8 и обратно, по одному символу.
//!
//! поддерживается исходная схема UTF-8 с последовательностями до 6 байт (кодпоинты до U+7FFFFFFF).
//! последовательность представляется как [`Sequence`] - байты или одно число (big-endian),
//! в шестнадцатеричной записи которого пары цифр соответствуют байтам: `[0xE2, 0x82, 0xAC]` <-> `0xE282AC`.
//!
//! ```
//! let euro = utf8_codec::encode(0x20AC).unwrap();
//!
//! assert_eq!(euro.as_bytes(), &[0xE2, 0x82, 0xAC]);
//! assert_eq!(euro.packed(), 0xE282AC);
//! assert_eq!(euro.to_string(), "e282ac");
//!
//! assert_eq!(utf8_codec::decode(0xE282AC), Ok(0x20AC));
//! ```

use log::debug;

pub use decode::DecodeMode;
pub use error::{CodecError, Result};
pub use sequence::Sequence;
pub use tier::{sequence_width, Tier, MAX_CODEPOINT, MAX_WIDTH, TIERS};

mod decode;
mod encode;
mod error;
mod sequence;
mod tier;

/// кодек. кодирование от режима не зависит, режим определяет строгость проверок при декодировании
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Codec
{
    mode: DecodeMode,
}

impl Codec
{
    pub fn new(mode: DecodeMode) -> Self
    {
        if mode != DecodeMode::default() {
            debug!("кодек UTF-8, режим декодирования: {:?}", mode);
        }

        Self { mode }
    }

    /// проверка только диапазонов упакованных значений
    pub fn permissive() -> Self
    {
        Self::new(DecodeMode::Permissive)
    }

    /// проверка диапазонов и меток байтов продолжения
    pub fn strict() -> Self
    {
        Self::new(DecodeMode::Strict)
    }

    #[inline(always)]
    pub fn mode(&self) -> DecodeMode
    {
        self.mode
    }

    /// закодировать кодпоинт, [`CodecError::InvalidCodepoint`] для значений > U+7FFFFFFF
    #[inline]
    pub fn encode(&self, code: u32) -> Result<Sequence>
    {
        encode::encode(code)
    }

    #[inline]
    pub fn encode_char(&self, c: char) -> Sequence
    {
        encode::encode_char(c)
    }

    /// декодировать упакованную последовательность, [`CodecError::InvalidEncoding`] если
    /// значение не попадает ни в один из диапазонов
    #[inline]
    pub fn decode(&self, packed: u64) -> Result<u32>
    {
        decode::decode(packed, self.mode)
    }

    #[inline]
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<u32>
    {
        decode::decode_bytes(bytes, self.mode)
    }

    #[inline]
    pub fn decode_char(&self, packed: u64) -> Result<char>
    {
        decode::decode_char(packed, self.mode)
    }

    #[inline]
    pub fn decode_hex(&self, hex: &str) -> Result<u32>
    {
        decode::decode_hex(hex, self.mode)
    }
}

/// закодировать кодпоинт
#[inline]
pub fn encode(code: u32) -> Result<Sequence>
{
    encode::encode(code)
}

/// закодировать символ
#[inline]
pub fn encode_char(c: char) -> Sequence
{
    encode::encode_char(c)
}

/// декодировать упакованную последовательность (без проверки байтов продолжения)
#[inline]
pub fn decode(packed: u64) -> Result<u32>
{
    decode::decode(packed, DecodeMode::Permissive)
}

/// декодировать последовательность байт (без проверки байтов продолжения)
#[inline]
pub fn decode_bytes(bytes: &[u8]) -> Result<u32>
{
    decode::decode_bytes(bytes, DecodeMode::Permissive)
}

/// декодировать последовательность в символ
#[inline]
pub fn decode_char(packed: u64) -> Result<char>
{
    decode::decode_char(packed, DecodeMode::Permissive)
}

/// декодировать шестнадцатеричную запись последовательности
#[inline]
pub fn decode_hex(hex: &str) -> Result<u32>
{
    decode::decode_hex(hex, DecodeMode::Permissive)
}
