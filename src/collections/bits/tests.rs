#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;
use crate::util::error::IndexOutOfBounds;

#[test]
fn test_zeroed_starts_clear() {
    let bits = BitArray::zeroed(3, BitNumbering::LsbFirst);

    assert_eq!(bits.max_bit(), 24);
    assert_eq!(bits.count_ones(), 0);
    for position in 0..bits.max_bit() {
        assert!(!bits.test_bit(position));
    }
}

#[test]
fn test_lsb_first_maps_position_zero_to_the_low_bit() {
    let bits = BitArray::from_bytes([0b0000_0001, 0b0000_0000, 0b1000_0000], BitNumbering::LsbFirst);

    assert!(bits.test_bit(0));
    assert!(!bits.test_bit(7));
    assert!(!bits.test_bit(8));
    assert!(bits.test_bit(23));
    assert_eq!(bits.count_ones(), 2);
}

#[test]
fn test_msb_first_maps_position_zero_to_the_high_bit() {
    let bits = BitArray::from_bytes([0b1000_0000, 0b0000_0000, 0b0000_0001], BitNumbering::MsbFirst);

    assert!(bits.test_bit(0));
    assert!(!bits.test_bit(7));
    assert!(!bits.test_bit(16));
    assert!(bits.test_bit(23));
}

#[test]
fn test_same_bytes_read_differently_under_each_numbering() {
    let bytes = [0b0000_0010_u8];

    let lsb = BitArray::from_bytes(bytes, BitNumbering::LsbFirst);
    let msb = BitArray::from_bytes(bytes, BitNumbering::MsbFirst);

    assert!(lsb.test_bit(1));
    assert!(!msb.test_bit(1));
    assert!(msb.test_bit(6));
    assert!(!lsb.test_bit(6));
}

#[test]
fn test_set_and_clean_round_trip() {
    let mut bits = BitArray::zeroed(3, BitNumbering::LsbFirst);

    bits.set_bit(4);
    bits.set_bit(9);
    assert!(bits.test_bit(4));
    assert!(bits.test_bit(9));
    assert_eq!(bits.count_ones(), 2);

    bits.clean_bit(4);
    assert!(!bits.test_bit(4));
    assert!(bits.test_bit(9));
    assert_eq!(bits.count_ones(), 1);
}

#[test]
fn test_set_does_not_disturb_neighbours() {
    let mut bits = BitArray::from_bytes([0b1010_1010], BitNumbering::LsbFirst);

    bits.set_bit(0);

    assert_eq!(bits.as_bytes(), &[0b1010_1011]);
}

#[test]
fn test_byte_layout_is_preserved() {
    let mut bits = BitArray::zeroed(2, BitNumbering::MsbFirst);

    bits.set_bit(0);
    bits.set_bit(15);

    assert_eq!(bits.as_bytes(), &[0b1000_0000, 0b0000_0001]);
    assert_eq!(bits.into_bytes().as_ref(), &[0b1000_0000, 0b0000_0001]);
}

#[test]
fn test_out_of_range_positions() {
    let mut bits = BitArray::zeroed(1, BitNumbering::LsbFirst);

    assert_eq!(
        bits.try_test_bit(8),
        Err(IndexOutOfBounds {
            index: 8,
            len: 8,
        })
    );
    assert_eq!(bits.try_set_bit(100), Err(IndexOutOfBounds {
        index: 100,
        len: 8,
    }));
    assert!(bits.try_clean_bit(7).is_ok());

    assert_panics!({
        let bits = BitArray::zeroed(1, BitNumbering::MsbFirst);
        bits.test_bit(8)
    });
}

#[test]
fn test_equal_bit_arrays_hash_alike() {
    use std::hash::{BuildHasher, RandomState};

    let state = RandomState::new();
    let a = BitArray::from_bytes([0b0000_0110], BitNumbering::LsbFirst);
    let b = BitArray::from_bytes([0b0000_0110], BitNumbering::LsbFirst);

    assert_eq!(a, b);
    assert_eq!(state.hash_one(&a), state.hash_one(&b));

    let msb = BitArray::from_bytes([0b0000_0110], BitNumbering::MsbFirst);
    assert_ne!(a, msb, "The numbering participates in equality.");
}

#[test]
fn test_numbering_accessor() {
    let bits = BitArray::zeroed(1, BitNumbering::MsbFirst);

    assert!(bits.numbering().is_msb_first());
    assert!(!bits.numbering().is_lsb_first());
}
