use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tinyqr::{generate, render, Flag, Generator, MaskScope, Scanner};

const SCOPES: [MaskScope; 2] = [MaskScope::ExemptModeAndTerminator, MaskScope::Uniform];

fn decode(message: &[u8], scope: MaskScope) -> Vec<Vec<u8>> {
    let matrix = Generator::new(Flag::new().with_mask_scope(scope))
        .generate(message)
        .unwrap();
    Scanner::scan_symbol(&matrix).unwrap()
}

#[test]
fn paged_out_reads_back() {
    for scope in SCOPES {
        assert_eq!(decode(b"PagedOut!", scope), vec![b"PagedOut!".to_vec()], "{scope:?}");
    }
}

#[test]
fn every_length_reads_back() {
    let alphabet = b"0123456789abcdefghijklmnopqrstuvwxyz";
    for len in 1..=14 {
        let message: Vec<u8> = alphabet.iter().copied().cycle().skip(len).take(len).collect();
        for scope in SCOPES {
            assert_eq!(decode(&message, scope), vec![message.clone()], "len {len}, {scope:?}");
        }
    }
}

#[test]
fn control_and_high_bytes_read_back() {
    let messages: [&[u8]; 5] = [
        &[0x00],
        &[0xFF, 0x00, 0x80],
        &[0x80, 0x81, 0x8D, 0x8F, 0x90, 0x9D, 0x9F],
        &[0xFF; 14],
        &[0x00, 0x01, 0x7F, 0x80, 0x9F, 0xA0, 0xC3, 0x28, 0xE9, 0xFE, 0xFF, 0x00, 0x0A, 0x0D],
    ];
    for message in messages {
        for scope in SCOPES {
            assert_eq!(decode(message, scope), vec![message.to_vec()], "{message:02X?}, {scope:?}");
        }
    }
}

#[test]
fn random_bytes_read_back() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..32 {
        let len = rng.random_range(1..=14);
        let message: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        for scope in SCOPES {
            assert_eq!(decode(&message, scope), vec![message.clone()], "{message:02X?}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_message_reads_back(
        message in prop::collection::vec(any::<u8>(), 1..=14),
        uniform in any::<bool>(),
    ) {
        let scope = if uniform { MaskScope::Uniform } else { MaskScope::ExemptModeAndTerminator };
        prop_assert_eq!(decode(&message, scope), vec![message.clone()]);
    }
}

#[test]
fn rendered_png_scans_from_disk() {
    let matrix = generate(b"on disk").unwrap();
    let path = std::env::temp_dir().join(format!("tinyqr-roundtrip-{}.png", std::process::id()));
    render::raster::render(&matrix, 6).unwrap().save(&path).unwrap();

    let contents = Scanner::scan_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(contents, vec![b"on disk".to_vec()]);
}
