#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use monowav::{header, Wave};

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = header::decode(data) {
        assert_eq!(header::decode(&header::encode(&decoded)).ok(), Some(decoded));
    }

    if let Ok(wave) = Wave::read_from(&mut Cursor::new(data)) {
        assert_eq!(wave.waveform().len(), wave.data_size());
        let bytes = wave.to_bytes();
        assert_eq!(&bytes[..], &data[..bytes.len()]);
    }
});
