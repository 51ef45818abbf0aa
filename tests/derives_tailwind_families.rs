use shades::matcher::{DeltaE, HslDistance};
use shades::{
    Color, ColorFamily, HueDirective, MatchesColors, References, Shade, derive_family, synthesize,
};

/// Colors from the Tailwind CSS v1 palette, which
/// are close to (but not in) the v3 palette.
const LEGACY_COLORS: [&str; 8] = [
    "#e3342f", "#f6993f", "#ffed4a", "#38c172", "#4dc0b5", "#3490dc", "#6574cd", "#f66d9b",
];

#[test]
fn anchors_every_derived_family() {
    let references = References::tailwind();

    for hex in LEGACY_COLORS {
        let color = Color::try_from_hex(hex).unwrap();

        for matcher in [&DeltaE as &dyn MatchesColors, &HslDistance] {
            let matched = matcher.closest(&color, &references).unwrap();
            let derived = synthesize(&color, &matched).unwrap();

            // The family keeps the reference's scale.
            let numbers = derived.into_iter().map(|s| s.number).collect::<Vec<_>>();
            let reference = matched.family.into_iter().map(|s| s.number).collect::<Vec<_>>();
            assert_eq!(reference, numbers, "{hex}");

            // The input color sits exactly on the matched shade.
            let anchor = derived.shade(matched.shade.number).unwrap();
            assert_eq!(hex, anchor.hexcode.as_str());
        }
    }
}

#[test]
fn projects_rounded_values() {
    let references = References::tailwind();

    for hex in LEGACY_COLORS {
        let color = Color::try_from_hex(hex).unwrap();
        let derived = derive_family(&color, &references, &DeltaE).unwrap();

        for shade in &derived {
            assert!(shade.hue <= 360, "{shade:?}");
            assert!(shade.saturation <= 100, "{shade:?}");
            assert!(shade.lightness <= 100, "{shade:?}");
            assert!(shade.luminance <= 100, "{shade:?}");
            assert_eq!(shade.hexcode, shade.color.to_hex());
        }
    }
}

#[test]
fn derives_documented_gray_example() {
    let gray = ColorFamily::try_new(
        "gray".into(),
        vec![
            Shade::new(50, Color::try_from_hex("#f9fafb").unwrap()),
            Shade::new(500, Color::try_from_hex("#6b7280").unwrap()),
            Shade::new(900, Color::try_from_hex("#111827").unwrap()),
        ],
    )
    .unwrap();
    let references: References = vec![gray].into();

    // The only family's closest shade by lightness is 500.
    let input = Color::try_from_hex("#2563eb").unwrap();
    let derived = derive_family(&input, &references, &DeltaE).unwrap();

    assert!(matches!(derived.hue, HueDirective::Delta(delta) if delta > 1.0 && delta < 1.5));
    assert_eq!(500, derived.anchor);
    assert_eq!("#2563eb", derived.shade(500).unwrap().hexcode.as_str());

    for number in [50, 900] {
        let shade = derived.shade(number).unwrap();
        assert!(shade.saturation >= 90, "{shade:?}");
    }
}
