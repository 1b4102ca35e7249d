//    |  диапазон кодпоинтов   |  кодирование UTF-8
//  n |  (hex)                 |  (bin)
// ---+-----------------------+------------------------------------------------------
//  1 | 0000 0000 - 0000 007F |                                              0xxxxxxx
//  2 | 0000 0080 - 0000 07FF |                                     110xxxxx 10xxxxxx
//  3 | 0000 0800 - 0000 FFFF |                            1110xxxx 10xxxxxx 10xxxxxx
//  4 | 0001 0000 - 001F FFFF |                   11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
//  5 | 0020 0000 - 03FF FFFF |          111110xx 10xxxxxx 10xxxxxx 10xxxxxx 10xxxxxx
//  6 | 0400 0000 - 7FFF FFFF | 1111110x 10xxxxxx 10xxxxxx 10xxxxxx 10xxxxxx 10xxxxxx
//
// 5 и 6 байт - устаревшая (до RFC 3629) часть схемы, современный Unicode заканчивается на U+10FFFF

/// максимальная длина последовательности
pub const MAX_WIDTH: usize = 6;
/// последний кодпоинт, который может быть закодирован
pub const MAX_CODEPOINT: u32 = 0x7FFF_FFFF;

/// маска, исключающая 2 старших бита в байтах продолжения
pub const CONT_MASK: u8 = 0x3F;
/// метка байта продолжения - 10xxxxxx
pub const CONT_TAG: u8 = 0x80;
/// маска метки байта продолжения
pub const CONT_TAG_MASK: u8 = 0xC0;

/// диапазон кодпоинтов, кодируемых последовательностью определённой длины
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier
{
    /// количество байт
    pub width: u8,
    /// первый кодпоинт диапазона
    pub first: u32,
    /// последний кодпоинт диапазона
    pub last: u32,
    /// метка первого байта (старшие биты)
    pub tag: u8,
    /// маска битов значения первого байта
    pub lead_mask: u8,
    /// нижняя граница упакованного значения, принимаемого декодером
    pub packed_first: u64,
    /// верхняя граница упакованного значения, принимаемого декодером
    pub packed_last: u64,
}

#[rustfmt::skip]
pub const TIERS: [Tier; MAX_WIDTH] = [
    Tier { width: 1, first: 0x0000_0000, last: 0x0000_007F, tag: 0x00, lead_mask: 0x7F, packed_first: 0x00,           packed_last: 0x7F },
    Tier { width: 2, first: 0x0000_0080, last: 0x0000_07FF, tag: 0xC0, lead_mask: 0x1F, packed_first: 0xC080,         packed_last: 0xDFBF },
    Tier { width: 3, first: 0x0000_0800, last: 0x0000_FFFF, tag: 0xE0, lead_mask: 0x0F, packed_first: 0xE08080,       packed_last: 0xEFBFBF },
    Tier { width: 4, first: 0x0001_0000, last: 0x001F_FFFF, tag: 0xF0, lead_mask: 0x07, packed_first: 0xF0808080,     packed_last: 0xF7BFBFBF },
    Tier { width: 5, first: 0x0020_0000, last: 0x03FF_FFFF, tag: 0xF8, lead_mask: 0x03, packed_first: 0xF880808080,   packed_last: 0xFBBFBFBFBF },
    Tier { width: 6, first: 0x0400_0000, last: 0x7FFF_FFFF, tag: 0xFC, lead_mask: 0x01, packed_first: 0xFC8080808080, packed_last: 0xFDBFBFBFBFBF },
];

impl Tier
{
    /// устаревший диапазон (5 или 6 байт), за пределами U+10FFFF
    #[inline(always)]
    pub fn is_legacy(&self) -> bool
    {
        self.width > 4
    }

    /// количество байт продолжения
    #[inline(always)]
    pub fn continuation_bytes(&self) -> u32
    {
        self.width as u32 - 1
    }

    #[inline(always)]
    fn contains_codepoint(&self, code: u32) -> bool
    {
        (self.first ..= self.last).contains(&code)
    }

    #[inline(always)]
    fn contains_packed(&self, packed: u64) -> bool
    {
        (self.packed_first ..= self.packed_last).contains(&packed)
    }
}

/// диапазон, в который попадает кодпоинт
#[inline]
pub fn for_codepoint(code: u32) -> Option<&'static Tier>
{
    TIERS.iter().find(|tier| tier.contains_codepoint(code))
}

/// диапазон, в который попадает упакованная последовательность
#[inline]
pub fn for_packed(packed: u64) -> Option<&'static Tier>
{
    TIERS.iter().find(|tier| tier.contains_packed(packed))
}

/// количество байт последовательности по её первому байту
#[inline(always)]
pub fn sequence_width(first: u8) -> Option<u8>
{
    match first {
        0 ..= 0x7F => Some(1),
        0xC0 ..= 0xDF => Some(2),
        0xE0 ..= 0xEF => Some(3),
        0xF0 ..= 0xF7 => Some(4),
        0xF8 ..= 0xFB => Some(5),
        0xFC ..= 0xFD => Some(6),
        _ => None,
    }
}

/// является ли байт байтом продолжения (10xxxxxx)
#[inline(always)]
pub fn is_continuation_byte(byte: u8) -> bool
{
    byte & CONT_TAG_MASK == CONT_TAG
}
