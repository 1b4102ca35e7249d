use criterion::{criterion_group, criterion_main, Criterion};

mod group;

fn chars(text: &str) -> Vec<char>
{
    text.chars().collect()
}

fn bytes(text: &str) -> Vec<u8>
{
    text.as_bytes().to_vec()
}

/// кодирование стандартной библиотекой - для сравнения
#[inline(never)]
fn encode(chars: &[char]) -> u64
{
    let mut buffer = [0; 4];

    chars.iter().fold(0, |acc, c| {
        let bytes = c.encode_utf8(&mut buffer).as_bytes();

        acc ^ bytes.iter().fold(0, |packed, byte| packed << 8 | *byte as u64)
    })
}

#[inline(never)]
fn decode(bytes: &[u8]) -> u32
{
    std::str::from_utf8(bytes)
        .unwrap()
        .chars()
        .fold(0, |acc, c| acc ^ c as u32)
}

group!(encode_group, "encode", "std", chars, encode);
group!(decode_group, "decode", "std", bytes, decode);

criterion_group!(benches, encode_group, decode_group);
criterion_main!(benches);
