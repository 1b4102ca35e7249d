use log::trace;

use crate::error::{CodecError, Result};
use crate::sequence::Sequence;
use crate::tier::{self, Tier, CONT_MASK, CONT_TAG, MAX_WIDTH, TIERS};

/// закодировать кодпоинт (0 ..= 0x7FFFFFFF)
#[inline]
pub fn encode(code: u32) -> Result<Sequence>
{
    match tier::for_codepoint(code) {
        Some(tier) => Ok(encode_in_tier(code, tier)),
        None => {
            trace!("кодпоинт {:#X} не попадает ни в один диапазон", code);
            Err(CodecError::InvalidCodepoint(code))
        }
    }
}

/// закодировать символ. скалярные значения Unicode всегда укладываются в 1 - 4 байта
#[inline]
pub fn encode_char(c: char) -> Sequence
{
    let code = u32::from(c);

    let tier = match code {
        0 ..= 0x7F => &TIERS[0],
        0x80 ..= 0x7FF => &TIERS[1],
        0x800 ..= 0xFFFF => &TIERS[2],
        _ => &TIERS[3],
    };

    encode_in_tier(code, tier)
}

/// разложить кодпоинт на байты последовательности выбранной длины
#[inline(always)]
fn encode_in_tier(code: u32, tier: &Tier) -> Sequence
{
    let mut bytes = [0; MAX_WIDTH];
    let mut rest = code;

    // байты продолжения: по 6 бит, начиная с младших, 10xxxxxx
    for byte in bytes[1 .. tier.width as usize].iter_mut().rev() {
        *byte = (rest as u8 & CONT_MASK) | CONT_TAG;
        rest >>= 6;
    }

    // оставшиеся старшие биты + метка длины
    bytes[0] = rest as u8 | tier.tag;

    Sequence::from_parts(bytes, tier.width)
}
