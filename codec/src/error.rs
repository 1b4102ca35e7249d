use core::num::ParseIntError;

use thiserror::Error;

/// ошибки кодирования / декодирования
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError
{
    /// кодпоинт за пределами U+7FFFFFFF
    #[error("некорректный кодпоинт: {0:#X} (максимум - 0x7FFFFFFF)")]
    InvalidCodepoint(u32),

    /// упакованное значение не попадает ни в один из диапазонов UTF-8
    #[error("некорректная последовательность UTF-8: {0:#X}")]
    InvalidEncoding(u64),

    /// последовательность пуста или длиннее 6 байт
    #[error("некорректная длина последовательности: {0} байт")]
    InvalidLength(usize),

    /// кодпоинт декодирован, но не является скалярным значением Unicode (суррогат или > U+10FFFF)
    #[error("кодпоинт U+{0:04X} не является скалярным значением Unicode")]
    NotAScalar(u32),

    /// строка не является шестнадцатеричным числом
    #[error("некорректная шестнадцатеричная запись: {0}")]
    InvalidHex(#[from] ParseIntError),
}

pub type Result<T> = core::result::Result<T, CodecError>;
