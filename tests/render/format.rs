use stockview::render::format::{dollars, dollars_grouped, grouped, percent, plain};

#[test]
fn grouped_uses_en_us_separators() {
    assert_eq!(grouped(0.0), "0");
    assert_eq!(grouped(999.0), "999");
    assert_eq!(grouped(1_000.0), "1,000");
    assert_eq!(grouped(98_765_432.0), "98,765,432");
    assert_eq!(grouped(792_345_678_912.0), "792,345,678,912");
    assert_eq!(grouped(-1_234_567.0), "-1,234,567");
}

#[test]
fn grouped_keeps_at_most_three_fraction_digits() {
    assert_eq!(grouped(1234.5), "1,234.5");
    assert_eq!(grouped(1234.5678), "1,234.568");
    assert_eq!(grouped(0.1), "0.1");
    assert_eq!(grouped(-0.0001), "0");
}

#[test]
fn plain_drops_integral_fraction() {
    assert_eq!(plain(250.0), "250");
    assert_eq!(plain(248.5), "248.5");
    assert_eq!(dollars(24.86), "$24.86");
    assert_eq!(dollars_grouped(278_000.0), "$278,000");
}

#[test]
fn percent_scales_and_fixes_two_places() {
    assert_eq!(percent(0.1234), "12.34%");
    assert_eq!(percent(0.078), "7.80%");
    assert_eq!(percent(0.0), "0.00%");
    assert_eq!(percent(-0.0525), "-5.25%");
}
