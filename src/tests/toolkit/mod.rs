use crate::prelude::*;

/// Decodes given report, which must be valid, in the test reference context
#[macro_export]
macro_rules! decoded {
    ($report: expr) => {
        $crate::tests::toolkit::decoder().decode($report).unwrap()
    };
}

/// Reference date used in all tests: 2026-10-17, midnight UTC
pub fn reference() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(2026, 10, 17)
}

/// [Decoder] in the test reference context
pub fn decoder() -> Decoder {
    Decoder::default().with_reference(reference())
}

/// Panics if `value` is not within `tolerance` of `expected`
pub fn assert_close(value: Option<f64>, expected: f64, tolerance: f64) {
    let value = value.unwrap_or_else(|| panic!("expecting {}, got nothing", expected));
    let err = (value - expected).abs();
    assert!(
        err < tolerance,
        "expecting {} got {} (|err|={} > {})",
        expected,
        value,
        err,
        tolerance
    );
}
