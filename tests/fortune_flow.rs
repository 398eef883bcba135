//! # End-to-End Fortune Tests
//!
//! Drive the library the way the device does: render a slip, register it,
//! print it through a session on an in-memory transport, and check the
//! exact bytes that would reach the printer.

use fortuna::config::{AssetSelection, FortuneConfig, LidConfig};
use fortuna::fortune::assets::{AssetFile, FortuneAsset, MemoryRegistry};
use fortuna::fortune::{FortunePrinter, PrintedSlip, live};
use fortuna::layout::{self, BlockFont, wrap_chars};
use fortuna::render::pack::unpack;
use fortuna::render::slip::{FontSizing, SlipOptions, render_slip};
use fortuna::trigger::{ControlLoop, LidDebouncer, ScriptedPin, TickOutcome};
use fortuna::{MemoryTransport, PrinterConfig, PrinterSession};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

const ESC: u8 = 0x1B;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn session() -> PrinterSession<MemoryTransport> {
    let mut s = PrinterSession::new(MemoryTransport::new(), PrinterConfig::QR203).unwrap();
    s.transport_mut().clear();
    s
}

/// Two rows of 18-dot corner blocks at dot 0 and dot 366.
fn corner_rows() -> Vec<u8> {
    let row = [
        ESC, b'$', 0, 0, ESC, b'*', 0, 3, 0, 0xFF, 0xFF, 0xFF, // left
        ESC, b'$', 0x6E, 0x01, ESC, b'*', 0, 3, 0, 0xFF, 0xFF, 0xFF, // right
        b'\n',
    ];
    [row, row].concat()
}

// ============================================================================
// LIVE FALLBACK
// ============================================================================

#[test]
fn test_live_slip_exact_bytes() {
    let mut s = session();
    live::print_live(&mut s, "Good luck.", &live::LiveSlipStyle::default()).unwrap();

    let mut expected = vec![ESC, b'd', 2];
    expected.extend(corner_rows());
    expected.extend([ESC, b'd', 1]);
    expected.extend([ESC, b'!', 16]);
    expected.extend([ESC, b'a', 1]);
    expected.extend(b"Good luck.\n");
    expected.extend([ESC, b'a', 0]);
    expected.extend([ESC, b'!', 0]);
    expected.extend([ESC, b'd', 1]);
    expected.extend(corner_rows());
    expected.extend([ESC, b'd', 16]);

    assert_eq!(s.transport().bytes(), expected);
}

#[test]
fn test_wrap_chars_scenario() {
    let text = "You will commit a very small crime against productivity.";
    let lines = wrap_chars(text, 28);
    assert_eq!(
        lines,
        vec!["You will commit a very small", "crime against productivity."]
    );
    assert_eq!(lines.join(" "), text);
}

// ============================================================================
// ASSET PATH
// ============================================================================

#[test]
fn test_rendered_slip_prints_row_by_row() {
    let options = SlipOptions {
        sizing: FontSizing::Auto { min: 12, max: 40 },
        ..SlipOptions::default()
    };
    let slip = render_slip(
        &BlockFont,
        "A surprise gift will be yours.\n\nLucky numbers: 5, 11, 23, 42, 77, 98",
        &options,
    )
    .unwrap();
    let asset = FortuneAsset::from_bitmap(slip.bitmap.clone()).unwrap();

    // JSON survives the trip through disk format
    let json = AssetFile::from(&asset).to_json().unwrap();
    let reloaded = AssetFile::from_json(&json).unwrap().into_asset().unwrap();
    assert_eq!(reloaded, asset);

    let printer = FortunePrinter::new(
        MemoryRegistry::new().with("slip_000", reloaded),
        FortuneConfig::default(),
    );
    let mut s = session();
    let mut rng = StdRng::seed_from_u64(9);
    let printed = printer.print_with_rng(&mut s, None, &mut rng).unwrap();
    assert_eq!(
        printed,
        PrintedSlip::Asset {
            name: "slip_000".to_string(),
            width: 120,
            height: 384,
        }
    );

    // Every bitmap row went out as its own bit image command
    let rows: Vec<Vec<u8>> = s
        .transport()
        .writes()
        .iter()
        .filter(|w| w.starts_with(&[ESC, b'*']))
        .map(|w| w[5..].to_vec())
        .collect();
    assert_eq!(rows.len(), 384);
    assert!(rows.iter().all(|r| r.len() == 15));
    assert_eq!(rows.concat(), slip.bitmap.data);
    assert_eq!(s.transport().writes().last().unwrap(), &vec![ESC, b'd', 6]);
}

#[test]
fn test_fixed_selection_picks_named_asset() {
    let a = FortuneAsset::new(8, 1, vec![0x0F]).unwrap();
    let b = FortuneAsset::new(8, 1, vec![0xF0]).unwrap();
    let config = FortuneConfig {
        selection: AssetSelection::Fixed("b".to_string()),
        ..FortuneConfig::default()
    };
    let printer = FortunePrinter::new(MemoryRegistry::new().with("a", a).with("b", b), config);

    let mut s = session();
    printer.print(&mut s, None).unwrap();
    let row = s
        .transport()
        .writes()
        .iter()
        .find(|w| w.starts_with(&[ESC, b'*']))
        .cloned()
        .unwrap();
    assert_eq!(row, vec![ESC, b'*', 0, 1, 0, 0xF0]);
}

// ============================================================================
// LAYOUT + RASTER
// ============================================================================

#[test]
fn test_layout_size_bounds_hold() {
    for text in [
        "Adventure awaits around the corner.",
        "Perhaps you will forget tomorrow the kind words you say today, but the recipient may cherish them over a lifetime.",
        "Supercalifragilisticexpialidocious",
    ] {
        let result = layout::layout(&BlockFont, text, 18, 72, 300);
        assert!((18..=72).contains(&result.primary_size), "{}", text);
        if result.fits {
            assert!(result.primary_lines().all(|l| l.width <= 300), "{}", text);
        }
    }
}

#[test]
fn test_slip_rotation_keeps_content() {
    let unrotated = SlipOptions {
        rotation: fortuna::render::rotate::Rotation::Deg0,
        ..SlipOptions::default()
    };
    let flat = render_slip(&BlockFont, "Good things come to those who wait.", &unrotated).unwrap();
    let turned = render_slip(
        &BlockFont,
        "Good things come to those who wait.",
        &SlipOptions::default(),
    )
    .unwrap();

    // 384x120 turned a quarter: no columns dropped, so no ink is lost
    assert_eq!(unpack(&flat.bitmap).ink(), unpack(&turned.bitmap).ink());
    assert_eq!(
        (turned.bitmap.width, turned.bitmap.height),
        (flat.bitmap.height, flat.bitmap.width)
    );
}

// ============================================================================
// CONTROL LOOP
// ============================================================================

#[test]
fn test_lid_open_prints_live_fortune() {
    // closed at boot for a second, then the lid opens and stays open
    let mut levels = vec![false; 12];
    levels.extend([true; 5]);

    let config = FortuneConfig {
        fortunes: vec!["Your hard work will pay off soon.".to_string()],
        ..FortuneConfig::default()
    };
    let mut control = ControlLoop::new(
        ScriptedPin::new(levels),
        LidDebouncer::new(&LidConfig::default()),
        Some(session()),
        FortunePrinter::new(MemoryRegistry::new(), config),
        Duration::from_millis(100),
    );

    let outcomes: Vec<TickOutcome> = (0..17).map(|i| control.tick(i * 100)).collect();
    let printed: Vec<&TickOutcome> = outcomes
        .iter()
        .filter(|o| matches!(o, TickOutcome::Printed(_)))
        .collect();
    assert_eq!(
        printed,
        vec![&TickOutcome::Printed(PrintedSlip::Live {
            text: "Your hard work will pay off soon.".to_string(),
            lines: vec![
                "Your hard work will pay off".to_string(),
                "soon.".to_string()
            ],
        })]
    );

    let bytes = control.session().unwrap().transport().bytes();
    assert!(bytes.windows(5).any(|w| w == b"soon."));
}
