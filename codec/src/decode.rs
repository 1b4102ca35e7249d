use log::trace;

use crate::error::{CodecError, Result};
use crate::sequence::pack;
use crate::tier::{self, Tier, CONT_MASK, MAX_WIDTH};

/// режим проверки последовательности при декодировании
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecodeMode
{
    /// проверяется только попадание упакованного значения в диапазон. часть некорректных
    /// последовательностей (например, 0xC0C0) при этом декодируется
    #[default]
    Permissive,
    /// дополнительно каждый байт продолжения должен иметь вид 10xxxxxx.
    /// overlong-последовательности по-прежнему принимаются
    Strict,
}

/// декодировать упакованную последовательность
#[inline]
pub fn decode(packed: u64, mode: DecodeMode) -> Result<u32>
{
    decode_in_tier(packed, mode).map(|(code, _)| code)
}

/// декодировать последовательность байт, её длина должна совпадать с длиной, заданной первым байтом
pub fn decode_bytes(bytes: &[u8], mode: DecodeMode) -> Result<u32>
{
    if bytes.is_empty() || bytes.len() > MAX_WIDTH {
        trace!("последовательность длиной {} байт", bytes.len());
        return Err(CodecError::InvalidLength(bytes.len()));
    }

    let packed = pack(bytes);
    let (code, tier) = decode_in_tier(packed, mode)?;

    // ведущие нулевые байты упаковываются в более короткую последовательность
    if tier.width as usize != bytes.len() {
        trace!(
            "последовательность {:#X}: {} байт, ожидалось {}",
            packed,
            bytes.len(),
            tier.width
        );
        return Err(CodecError::InvalidEncoding(packed));
    }

    Ok(code)
}

/// декодировать последовательность в символ
#[inline]
pub fn decode_char(packed: u64, mode: DecodeMode) -> Result<char>
{
    let code = decode(packed, mode)?;

    char::from_u32(code).ok_or(CodecError::NotAScalar(code))
}

/// декодировать последовательность, записанную шестнадцатеричным числом (`e282ac`, `0xE282AC`)
pub fn decode_hex(hex: &str, mode: DecodeMode) -> Result<u32>
{
    let hex = hex.trim();
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    decode(u64::from_str_radix(digits, 16)?, mode)
}

/// найти диапазон и собрать кодпоинт: биты значения ведущего байта, затем по 6 бит каждого байта продолжения
#[inline(always)]
fn decode_in_tier(packed: u64, mode: DecodeMode) -> Result<(u32, &'static Tier)>
{
    let tier = match tier::for_packed(packed) {
        Some(tier) => tier,
        None => {
            trace!("последовательность {:#X} не попадает ни в один диапазон", packed);
            return Err(CodecError::InvalidEncoding(packed));
        }
    };

    let continuation = tier.continuation_bytes();
    let lead = (packed >> (8 * continuation)) as u8;
    let mut code = (lead & tier.lead_mask) as u32;

    for i in (0 .. continuation).rev() {
        let byte = (packed >> (8 * i)) as u8;

        if mode == DecodeMode::Strict && !tier::is_continuation_byte(byte) {
            trace!(
                "последовательность {:#X}: {:#04X} не является байтом продолжения",
                packed,
                byte
            );
            return Err(CodecError::InvalidEncoding(packed));
        }

        code = code << 6 | (byte & CONT_MASK) as u32;
    }

    Ok((code, tier))
}
