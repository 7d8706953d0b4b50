// crates/rsv-core/tests/decode_cases.rs
use rsv_core::{encode_to_vec, Reader, ReaderBuilder, RsvError};

fn read_all(input: &[u8]) -> Result<Vec<Vec<String>>, RsvError> {
    Reader::new(input).read_all()
}

fn rec(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[test]
fn well_formed_streams_decode() {
    let cases: Vec<(&[u8], Vec<Vec<String>>)> = vec![
        (&b"abc\xFF\xFD"[..], vec![rec(&["abc"])]),
        (&b"\xFD"[..], vec![rec(&[])]),
        (&b"\xFF\xFD"[..], vec![rec(&[""])]),
        (&b"\xFF\xFD\xFF\xFD"[..], vec![rec(&[""]), rec(&[""])]),
        (&b"a\xFF\xFF\xFF\xFD"[..], vec![rec(&["a", "", ""])]),
    ];

    for (n, (input, expected)) in cases.into_iter().enumerate() {
        let out = read_all(input).unwrap_or_else(|e| panic!("#{} unexpected error: {}", n, e));
        assert_eq!(out, expected, "#{}", n);
    }
}

#[test]
fn mixed_stream_decodes_in_order() {
    let mut input = Vec::new();
    input.extend_from_slice(b"Hello\xFF");
    input.extend_from_slice("🌎".as_bytes());
    input.extend_from_slice(b"\xFF\xFD");
    input.extend_from_slice(b"\xFD");
    input.extend_from_slice(b"\xFFabc\xFF\xFD");

    let out = read_all(&input).unwrap();
    assert_eq!(out, vec![rec(&["Hello", "🌎"]), rec(&[]), rec(&["", "abc"])]);
}

#[test]
fn long_field_spanning_buffer_refills() {
    let mut input = vec![b'a'; 5000];
    input.extend_from_slice(b"\xFFb\xFF\xFD");

    // A tiny buffer forces many refills inside one row.
    let mut rdr = ReaderBuilder::new().capacity(16).from_reader(input.as_slice());
    let out = rdr.read_all().unwrap();

    assert_eq!(out, vec![vec!["a".repeat(5000), "b".to_string()]]);
}

#[test]
fn tiny_buffer_capacities_still_decode() {
    let input = encode_to_vec([vec!["a", "b"], vec!["c"]]);

    for capacity in [0, 1] {
        let mut rdr = ReaderBuilder::new().capacity(capacity).from_reader(input.as_slice());
        let out = rdr.read_all().unwrap();
        assert_eq!(out, vec![rec(&["a", "b"]), rec(&["c"])], "capacity {}", capacity);

        // Malformed input must still fail, not look like end of stream.
        let err = ReaderBuilder::new()
            .capacity(capacity)
            .from_reader(&b"a\xFF"[..])
            .read_all()
            .unwrap_err();
        assert!(matches!(err, RsvError::UnterminatedRow), "capacity {}", capacity);
    }
}

#[test]
fn empty_input_has_no_records() {
    assert!(read_all(b"").unwrap().is_empty());

    let mut rdr = Reader::new(&b""[..]);
    assert!(rdr.read_record().unwrap().is_none());
    // End of stream is stable.
    assert!(rdr.read_record().unwrap().is_none());
}

#[test]
fn malformed_streams_fail() {
    // (input, ends without a row terminator)
    let cases: Vec<(&[u8], bool)> = vec![
        (&b"a"[..], true),
        (&b"a\xFF"[..], true),
        (&b"a\xFF\xFDb\xFF"[..], true),
        (&b"a\xFD"[..], false),
        (&b"a\xFFb\xFD"[..], false),
        (&b"a\xFF\xFDb\xFD"[..], false),
    ];

    for (n, (input, unterminated_row)) in cases.into_iter().enumerate() {
        let err = match read_all(input) {
            Ok(out) => panic!("#{} expected an error, got {:?}", n, out),
            Err(err) => err,
        };

        if unterminated_row {
            assert!(matches!(err, RsvError::UnterminatedRow), "#{} got {}", n, err);
        } else {
            assert!(matches!(err, RsvError::UnterminatedField), "#{} got {}", n, err);
        }
        assert!(err.is_malformed());
    }
}

#[test]
fn failed_read_returns_no_fields_and_reader_moves_on() {
    let mut rdr = Reader::new(&b"a\xFFb\xFDc\xFF\xFD"[..]);

    let err = rdr.read_record().unwrap_err();
    assert!(matches!(err, RsvError::UnterminatedField));
    assert_eq!(rdr.records_read(), 0);

    // The bad row was consumed; the next one is intact.
    assert_eq!(rdr.read_record().unwrap(), Some(rec(&["c"])));
    assert_eq!(rdr.records_read(), 1);
}

#[test]
fn records_iterator_stops_after_error() {
    let mut rdr = Reader::new(&b"x\xFF\xFDy\xFDz\xFF\xFD"[..]);
    let items: Vec<_> = rdr.records().collect();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap(), &rec(&["x"]));
    assert!(matches!(items[1], Err(RsvError::UnterminatedField)));
}

#[test]
fn byte_records_skip_utf8_checks() {
    let input = b"\xC3\xFFok\xFF\xFD";

    let mut rdr = Reader::new(&input[..]);
    let out = rdr.byte_records().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(out, vec![vec![vec![0xC3], b"ok".to_vec()]]);

    let err = Reader::new(&input[..]).read_all().unwrap_err();
    assert!(matches!(err, RsvError::InvalidUtf8 { field: 0 }));
}

#[test]
fn code_point_split_across_fields_is_rejected() {
    // F0 9F | 8C 8E is a valid sequence only when the fields are joined.
    let input = b"\xF0\x9F\xFF\x8C\x8E\xFF\xFD";
    let err = Reader::new(&input[..]).read_record().unwrap_err();
    assert!(matches!(err, RsvError::InvalidUtf8 { field: 0 }));
}
