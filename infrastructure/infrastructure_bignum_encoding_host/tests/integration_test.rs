//! Integration tests for infrastructure_bignum_encoding_host crate
//!
//! These tests load patterned and random magnitudes through the host library
//! backend and check what comes back out in each wire order.

use entities_wire_format::{MarshalError, WireOrder};
use infrastructure_bignum_encoding_host::*;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::Natural;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use usecases_bignum_marshal::{AllocContext, HeapContext, MarshalBackend};

// Patterned so the final position of every byte is visible
const BIGEND: [u8; 16] = [
    0x44, 0x43, 0x42, 0x41, 0x34, 0x33, 0x32, 0x31, 0x24, 0x23, 0x22, 0x21, 0x14, 0x13, 0x12, 0x11,
];
const LTLEND: [u8; 16] = [
    0x11, 0x12, 0x13, 0x14, 0x21, 0x22, 0x23, 0x24, 0x31, 0x32, 0x33, 0x34, 0x41, 0x42, 0x43, 0x44,
];

/// Random word-aligned big-endian bytes with a nonzero leading byte
fn random_canonical(rng: &mut ChaCha20Rng) -> Vec<u8> {
    let words = rng.gen_range(1..=64);
    let mut bytes: Vec<u8> = (0..words * 4).map(|_| rng.gen()).collect();
    bytes[0] = rng.gen_range(1..=255);
    bytes
}

#[test]
fn test_load_store_patterned_value() {
    let backend = HostLibraryBackend::new();
    let mut ctx = HeapContext::new();

    let mut handle = Some(backend.deserialize(&mut ctx, &BIGEND, WireOrder::BIG_ENDIAN).unwrap());
    let m = handle.as_ref().unwrap();

    let len = backend.serialized_len(m).unwrap();
    assert_eq!(len, 16);

    let mut out = [0u8; 16];
    backend.serialize(&mut ctx, m, &mut out, WireOrder::BIG_ENDIAN).unwrap();
    assert_eq!(out, BIGEND);

    backend.serialize(&mut ctx, m, &mut out, WireOrder::LITTLE_ENDIAN).unwrap();
    assert_eq!(out, LTLEND);

    backend.release(&mut ctx, &mut handle);
    assert!(handle.is_none());
    assert_eq!(ctx.in_use(), 0);
}

#[test]
fn test_little_endian_load_gives_same_value() {
    let backend = HostLibraryBackend::new();
    let mut ctx = HeapContext::new();
    let big = backend.deserialize(&mut ctx, &BIGEND, WireOrder::BIG_ENDIAN).unwrap();
    let little = backend.deserialize(&mut ctx, &LTLEND, WireOrder::LITTLE_ENDIAN).unwrap();
    assert_eq!(big, little);
}

#[test]
fn test_misaligned_load() {
    let backend = HostLibraryBackend::new();
    let mut ctx = HeapContext::new();
    let result = backend.deserialize(&mut ctx, &BIGEND[..15], WireOrder::BIG_ENDIAN);
    assert_eq!(result.unwrap_err(), MarshalError::InvalidParameter);
}

#[test]
fn test_round_trip_every_order() {
    let backend = HostLibraryBackend::new();
    let mut ctx = HeapContext::new();
    let mut rng = ChaCha20Rng::seed_from_u64(0x0551);

    for _ in 0..100 {
        let canonical = random_canonical(&mut rng);
        let expected = <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(
            8,
            canonical.iter().copied(),
        )
        .unwrap();

        for order in WireOrder::ALL {
            let laid_out = {
                let m = backend
                    .deserialize(&mut ctx, &canonical, WireOrder::BIG_ENDIAN)
                    .unwrap();
                backend.serialize_to_vec(&mut ctx, &m, order).unwrap()
            };

            let mut handle = Some(backend.deserialize(&mut ctx, &laid_out, order).unwrap());
            let m = handle.as_ref().unwrap();
            assert_eq!(m.value(), &expected);

            let mut out = vec![0u8; laid_out.len()];
            backend.serialize(&mut ctx, m, &mut out, order).unwrap();
            assert_eq!(out, laid_out);
            backend.release(&mut ctx, &mut handle);
        }
    }
}

#[test]
fn test_leading_zero_words_are_dropped() {
    let backend = HostLibraryBackend::new();
    let mut ctx = HeapContext::new();
    let padded = [0, 0, 0, 0, 0x11, 0x22, 0x33, 0x44];
    let m = backend.deserialize(&mut ctx, &padded, WireOrder::BIG_ENDIAN).unwrap();
    assert_eq!(backend.serialized_len(&m), Ok(4));
    let out = backend.serialize_to_vec(&mut ctx, &m, WireOrder::BIG_ENDIAN).unwrap();
    assert_eq!(out, vec![0x11, 0x22, 0x33, 0x44]);
}
