// tests/endian_tests.rs
use mbstrip_rs::endian::*;
use mbstrip_rs::{GeoRecord, StripError, RECORD_SIZE};
use proptest::prelude::*;

fn even_buffer() -> impl Strategy<Value = Vec<u8>> {
    (1usize..128).prop_flat_map(|half| prop::collection::vec(any::<u8>(), half * 2))
}

#[test]
fn test_scalar_widths() {
    let mut short = 0xABCDu16.to_ne_bytes();
    reverse_in_place(&mut short).unwrap();
    assert_eq!(u16::from_ne_bytes(short), 0xCDAB);

    let mut word = 0x0011_2233u32.to_ne_bytes();
    reverse_in_place(&mut word).unwrap();
    assert_eq!(u32::from_ne_bytes(word), 0x3322_1100);

    let value = -1234.5678f64;
    let mut double = [0u8; 8];
    reverse_into(&mut double, &value.to_be_bytes()).unwrap();
    assert_eq!(f64::from_le_bytes(double), value);
}

#[test]
fn test_whole_record_reversal() {
    let record = GeoRecord::new(1.0, 2.0, 3.0);
    let bytes = record.to_bytes();

    let mut reversed = [0u8; RECORD_SIZE];
    reverse_into(&mut reversed, &bytes).unwrap();

    // Whole-record reversal also reverses field order
    let mut expected = GeoRecord::new(3.0, 2.0, 1.0).to_bytes();
    swap_fields(&mut expected);
    assert_eq!(reversed, expected);
}

#[test]
fn test_invalid_arguments_leave_memory_alone() {
    let mut src = [1u8, 2, 3];
    let mut dest = [0u8; 3];

    assert!(matches!(swap_bytes(Some(&mut dest[..]), Some(&mut src[..]), 0), Err(StripError::EmptySpan)));
    assert!(matches!(swap_bytes(Some(&mut dest[..]), Some(&mut src[..]), 3), Err(StripError::OddLength(3))));
    assert!(matches!(swap_bytes(None, Some(&mut src[..]), 3), Err(StripError::OddLength(3))));
    assert!(matches!(swap_bytes(Some(&mut dest[..]), None, 2), Err(StripError::MissingSource)));

    assert_eq!(src, [1, 2, 3]);
    assert_eq!(dest, [0, 0, 0]);
}

proptest! {
    #[test]
    fn prop_double_reversal_is_identity(original in even_buffer()) {
        let mut buffer = original.clone();
        reverse_in_place(&mut buffer).unwrap();
        reverse_in_place(&mut buffer).unwrap();
        prop_assert_eq!(buffer, original);
    }

    #[test]
    fn prop_copy_matches_in_place(original in even_buffer()) {
        let mut copy = vec![0u8; original.len()];
        reverse_into(&mut copy, &original).unwrap();

        let mut in_place = original.clone();
        reverse_in_place(&mut in_place).unwrap();

        prop_assert_eq!(&copy, &in_place);
        let expected: Vec<u8> = original.iter().rev().copied().collect();
        prop_assert_eq!(copy, expected);
    }

    #[test]
    fn prop_copy_round_trip(original in even_buffer()) {
        let mut once = vec![0u8; original.len()];
        let mut twice = vec![0u8; original.len()];
        reverse_into(&mut once, &original).unwrap();
        reverse_into(&mut twice, &once).unwrap();
        prop_assert_eq!(twice, original);
    }

    #[test]
    fn prop_swap_endianness_matches_std(values in prop::collection::vec(any::<u64>(), 0..32)) {
        let mut swapped = values.clone();
        swap_endianness(&mut swapped).unwrap();
        let expected: Vec<u64> = values.iter().map(|v| v.swap_bytes()).collect();
        prop_assert_eq!(swapped, expected);
    }

    #[test]
    fn prop_odd_lengths_rejected(
        original in (0usize..32).prop_flat_map(|half| prop::collection::vec(any::<u8>(), half * 2 + 1))
    ) {
        let mut buffer = original.clone();
        let len = buffer.len();
        prop_assert!(swap_bytes(None, Some(&mut buffer[..]), len).is_err());
        prop_assert_eq!(buffer, original);
    }
}
