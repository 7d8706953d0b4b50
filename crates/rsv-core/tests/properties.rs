// crates/rsv-core/tests/properties.rs
//
// Property-based checks: round trip and byte-level concatenation.

use proptest::prelude::*;
use rsv_core::wire_types::is_delimiter;
use rsv_core::{decode_slice, encode_to_vec, Reader, Writer};

fn text_records() -> impl Strategy<Value = Vec<Vec<String>>> {
    // UTF-8 text can never contain 0xFF or 0xFD.
    prop::collection::vec(prop::collection::vec(any::<String>(), 0..6), 0..12)
}

fn byte_records() -> impl Strategy<Value = Vec<Vec<Vec<u8>>>> {
    let byte = any::<u8>().prop_filter("reserved byte", |b| !is_delimiter(*b));
    let field = prop::collection::vec(byte, 0..24);
    prop::collection::vec(prop::collection::vec(field, 0..6), 0..12)
}

fn encode(records: &[Vec<String>]) -> Vec<u8> {
    let mut wtr = Writer::new(Vec::new());
    wtr.write_all(records).unwrap();
    wtr.into_inner().unwrap()
}

proptest! {
    #[test]
    fn prop_text_round_trip(records in text_records()) {
        let wire = encode(&records);
        let decoded = Reader::new(wire.as_slice()).read_all().unwrap();
        prop_assert_eq!(&decoded, &records);

        // Slice helpers agree with the streaming pair.
        prop_assert_eq!(&encode_to_vec(&records), &wire);
        prop_assert_eq!(decode_slice(&wire).unwrap(), records);
    }

    #[test]
    fn prop_byte_round_trip(records in byte_records()) {
        let mut wtr = Writer::new(Vec::new());
        wtr.write_all(&records).unwrap();
        let wire = wtr.into_inner().unwrap();

        let decoded = Reader::new(wire.as_slice()).read_all_bytes().unwrap();
        prop_assert_eq!(decoded, records);
    }

    #[test]
    fn prop_concatenated_sessions_decode_as_one(a in text_records(), b in text_records()) {
        // Two independent writer sessions against one sink.
        let mut sink = Vec::new();
        {
            let mut wtr = Writer::new(&mut sink);
            wtr.write_all(&a).unwrap();
        }
        {
            let mut wtr = Writer::new(&mut sink);
            wtr.write_all(&b).unwrap();
        }

        let decoded = Reader::new(sink.as_slice()).read_all().unwrap();
        let mut expected = a.clone();
        expected.extend(b.iter().cloned());
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_decoding_is_linear_in_record_count(records in text_records()) {
        let wire = encode(&records);
        let mut rdr = Reader::new(wire.as_slice());
        let count = rdr.records().map(|r| r.unwrap()).count();
        prop_assert_eq!(count, records.len());
        prop_assert_eq!(rdr.records_read(), records.len() as u64);
    }
}
