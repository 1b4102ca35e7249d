use criterion::{criterion_group, criterion_main, Criterion};
use utf8_codec::Codec;

mod group;

/// символы текста
fn chars(text: &str) -> Vec<char>
{
    text.chars().collect()
}

/// символы текста в виде упакованных последовательностей
fn packed(text: &str) -> Vec<u64>
{
    text.chars().map(|c| utf8_codec::encode_char(c).packed()).collect()
}

#[inline(never)]
fn encode(chars: &[char]) -> u64
{
    chars
        .iter()
        .fold(0, |acc, c| acc ^ utf8_codec::encode(*c as u32).unwrap().packed())
}

#[inline(never)]
fn decode_permissive(packed: &[u64]) -> u32
{
    let codec = Codec::permissive();

    packed.iter().fold(0, |acc, p| acc ^ codec.decode(*p).unwrap())
}

#[inline(never)]
fn decode_strict(packed: &[u64]) -> u32
{
    let codec = Codec::strict();

    packed.iter().fold(0, |acc, p| acc ^ codec.decode(*p).unwrap())
}

group!(encode_group, "encode", "codec", chars, encode);
group!(decode_group, "decode", "codec", packed, decode_permissive);
group!(decode_strict_group, "decode", "codec-strict", packed, decode_strict);

criterion_group!(benches, encode_group, decode_group, decode_strict_group);
criterion_main!(benches);
