#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use scalarjson::{ErrorKind, Parser, ParserOptions, Value};
use serde_json::Value as SerdeValue;

const HEADER: usize = 1; // flags

/// Flag bit: skip any Unicode whitespace, not just the JSON four.
const FLAG_UNICODE_WS: u8 = 1;
/// Flag bit: append a second value so the document has two roots.
const FLAG_SECOND_ROOT: u8 = 2;

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r", // JSON core
    "\u{00A0}".as_bytes(),
    "\u{1680}".as_bytes(),
    "\u{2000}".as_bytes(),
    "\u{2003}".as_bytes(),
    "\u{200A}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{2029}".as_bytes(),
    "\u{202F}".as_bytes(),
    "\u{205F}".as_bytes(),
    "\u{3000}".as_bytes(),
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        let flags = with_rng(|rng| rng.next_u32() as u8 & 0x3);
        data[0] = flags;

        let mut len = HEADER;
        len += append_whitespace(&mut data[len..], flags);
        len += append_value(&mut data[len..]);
        len += append_whitespace(&mut data[len..], flags);
        if flags & FLAG_SECOND_ROOT != 0 {
            len += append_value(&mut data[len..]);
        }
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 0‒8 whitespace code points to `buf` without overflowing it.
/// Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], flags: u8) -> usize {
    let table = if flags & FLAG_UNICODE_WS != 0 {
        WS_TABLE
    } else {
        &WS_TABLE[..4]
    };
    with_rng(|rng| {
        let n_codepoints = rng.random_range(0..=8);
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = table[rng.random_range(0..table.len())];
            if written + w.len() > buf.len() {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(buf: &mut [u8]) -> usize {
    let value = loop {
        let bytes: Vec<u8> = with_rng(|rng| (0..16).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryScalar::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(buf.len());
    buf[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryScalar(SerdeValue);

impl<'a> Arbitrary<'a> for ArbitraryScalar {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(3)? {
            0 => SerdeValue::Null,
            1 => SerdeValue::Bool(u.arbitrary()?),
            _ => {
                let n: f64 = u.arbitrary()?;
                SerdeValue::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
        };
        Ok(ArbitraryScalar(value))
    }
}

fn same_scalar(ours: Value, theirs: &SerdeValue) -> bool {
    match (ours, theirs) {
        (Value::Null, SerdeValue::Null) => true,
        (Value::True, SerdeValue::Bool(true)) | (Value::False, SerdeValue::Bool(false)) => true,
        (Value::Number(a), SerdeValue::Number(b)) => b.as_f64() == Some(a),
        _ => false,
    }
}

fn is_json_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// An unsigned `0` followed by anything but `.`, an exponent or the end of
/// input, which we reject and serde_json may accept (`0 `).
fn zero_without_marker(doc: &[u8]) -> bool {
    let mut rest = doc.iter().copied().skip_while(|&b| is_json_ws(b));
    rest.next() == Some(b'0') && rest.next().is_some_and(|b| !matches!(b, b'.' | b'e' | b'E'))
}

/// Decimal forms we accept and strict JSON does not: `1.`, `1.e5`, `-.5`,
/// `-01`.
fn relaxed_number(doc: &[u8]) -> bool {
    doc.windows(2).any(|w| matches!(w, [b'.', b] if !b.is_ascii_digit()) || w == b"-.")
        || doc
            .windows(3)
            .any(|w| matches!(w, [b'-', b'0', b] if b.is_ascii_digit()))
}

fn parser(data: &[u8]) {
    let Some((&flags, doc)) = data.split_first() else {
        return;
    };
    let unicode = flags & FLAG_UNICODE_WS != 0;

    let parser = Parser::new(ParserOptions {
        allow_unicode_whitespace: unicode,
        panic_on_error: false,
    });
    let ours = parser.parse(doc);
    let theirs = serde_json::from_slice::<SerdeValue>(doc);

    // serde_json accepts composites we do not parse; compare scalars only.
    match (&ours, &theirs) {
        (Ok(value), Ok(expected)) => {
            assert!(same_scalar(*value, expected), "{value:?} != {expected:?}");
        }
        (Err(err), Ok(expected)) => {
            assert!(
                expected.is_array()
                    || expected.is_object()
                    || expected.is_string()
                    || (err.kind() == ErrorKind::RootNotSingular && zero_without_marker(doc)),
                "rejected {expected:?}: {err}"
            );
        }
        (Ok(value), Err(err)) => {
            assert!(
                unicode || relaxed_number(doc),
                "accepted {value:?} that serde_json rejects: {err}"
            );
        }
        (Err(_), Err(_)) => {}
    }
}

fuzz_target!(|data: &[u8]| parser(data));
