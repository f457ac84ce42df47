use cat_wallet_core::{
    derive_effective_fee_rate, FeeOption, FeeRateEvent, FeeRateSelector, FeeSummary, FeeTier,
    FeeTierKind, FALLBACK_FEE_RATE,
};

fn sample_summary() -> FeeSummary {
    FeeSummary {
        list: vec![
            FeeOption::preset("Slow", 1.0),
            FeeOption::preset("Avg", 5.0),
            FeeOption::preset("Fast", 10.0),
        ],
    }
}

fn loaded_selector() -> FeeRateSelector {
    let mut selector = FeeRateSelector::new();
    selector.poll_change();
    selector.apply(FeeRateEvent::OptionsLoaded(sample_summary()));
    selector
}

#[test]
fn documented_scenario_emits_expected_rates() {
    let mut selector = FeeRateSelector::new();
    assert_eq!(selector.poll_change(), Some(5.0));

    // Average is 5, same as the mount-time fallback.
    assert_eq!(
        selector.apply(FeeRateEvent::OptionsLoaded(sample_summary())),
        None
    );
    assert_eq!(selector.tier(), &FeeTier::Average);
    assert_eq!(selector.effective_rate(), 5.0);

    assert_eq!(
        selector.apply(FeeRateEvent::Select(FeeTierKind::Fast)),
        Some(10.0)
    );
    assert_eq!(
        selector.apply(FeeRateEvent::Select(FeeTierKind::Custom)),
        Some(FALLBACK_FEE_RATE)
    );
    assert_eq!(
        selector.apply(FeeRateEvent::CustomInput("7.5".to_owned())),
        Some(7.5)
    );
    assert_eq!(selector.apply(FeeRateEvent::CustomBlur), Some(7.0));
    assert_eq!(selector.custom_input(), Some("7"));
}

#[test]
fn preset_tiers_use_configured_rate_or_fallback() {
    let options = vec![
        FeeOption::preset("Slow", 2.0),
        FeeOption {
            title: "Avg".to_owned(),
            desc: Some("about 30 minutes".to_owned()),
            fee_rate: None,
        },
        FeeOption::preset("Fast", 0.0),
    ];
    assert_eq!(derive_effective_fee_rate(&options, &FeeTier::Slow), 2.0);
    assert_eq!(derive_effective_fee_rate(&options, &FeeTier::Average), 5.0);
    assert_eq!(derive_effective_fee_rate(&options, &FeeTier::Fast), 5.0);
    assert_eq!(derive_effective_fee_rate(&[], &FeeTier::Fast), 5.0);
}

#[test]
fn custom_tier_parses_leading_number() {
    let custom = |input: &str| FeeTier::Custom {
        input: input.to_owned(),
    };
    assert_eq!(derive_effective_fee_rate(&[], &custom("12.25")), 12.25);
    assert_eq!(derive_effective_fee_rate(&[], &custom("3 sat/vB")), 3.0);
    assert_eq!(derive_effective_fee_rate(&[], &custom("")), 5.0);
    assert_eq!(derive_effective_fee_rate(&[], &custom("abc")), 5.0);
    assert_eq!(derive_effective_fee_rate(&[], &custom("0")), 5.0);
    assert_eq!(derive_effective_fee_rate(&[], &custom("-2")), 5.0);
    assert_eq!(derive_effective_fee_rate(&[], &custom("Infinity")), 5.0);
}

#[test]
fn duplicate_notifications_are_suppressed() {
    let mut selector = loaded_selector();
    selector.apply(FeeRateEvent::Select(FeeTierKind::Custom));
    assert_eq!(
        selector.apply(FeeRateEvent::CustomInput("7.5".to_owned())),
        Some(7.5)
    );
    assert_eq!(
        selector.apply(FeeRateEvent::CustomInput("7.50".to_owned())),
        None
    );
    assert_eq!(selector.apply(FeeRateEvent::Select(FeeTierKind::Custom)), None);
    assert_eq!(
        selector.apply(FeeRateEvent::OptionsLoaded(sample_summary())),
        None
    );
}

#[test]
fn blur_of_unparseable_input_stores_nan_literal() {
    let mut selector = loaded_selector();
    selector.apply(FeeRateEvent::Select(FeeTierKind::Custom));
    selector.apply(FeeRateEvent::CustomInput("fast please".to_owned()));
    selector.apply(FeeRateEvent::CustomBlur);
    assert_eq!(selector.custom_input(), Some("NaN"));
    assert_eq!(selector.effective_rate(), FALLBACK_FEE_RATE);
}

#[test]
fn blur_outside_custom_tier_is_ignored() {
    let mut selector = loaded_selector();
    assert_eq!(selector.apply(FeeRateEvent::CustomBlur), None);
    assert_eq!(
        selector.apply(FeeRateEvent::CustomInput("9".to_owned())),
        None
    );
    assert_eq!(selector.tier(), &FeeTier::Average);
}

#[test]
fn custom_text_survives_switching_tiers() {
    let mut selector = loaded_selector();
    selector.apply(FeeRateEvent::Select(FeeTierKind::Custom));
    selector.apply(FeeRateEvent::CustomInput("9".to_owned()));
    assert_eq!(
        selector.apply(FeeRateEvent::Select(FeeTierKind::Slow)),
        Some(1.0)
    );
    assert_eq!(selector.custom_input(), None);
    assert_eq!(
        selector.apply(FeeRateEvent::Select(FeeTierKind::Custom)),
        Some(9.0)
    );
    assert_eq!(selector.custom_input(), Some("9"));
}

#[test]
fn tiles_render_presets_then_custom() {
    let selector = loaded_selector();
    let tiles = selector.tiles();
    assert_eq!(tiles.len(), 4);
    assert_eq!(tiles[1].kind, FeeTierKind::Average);
    assert!(tiles[1].selected);
    assert_eq!(tiles[1].rate_label().as_deref(), Some("5 sat/vB"));
    assert_eq!(tiles[3].kind, FeeTierKind::Custom);
    assert_eq!(tiles[3].option.title, "Custom");
    assert_eq!(tiles[3].rate_label(), None);
}

#[test]
fn failed_options_fetch_renders_nothing() {
    let mut selector = FeeRateSelector::new();
    assert_eq!(selector.poll_change(), Some(5.0));
    assert_eq!(
        selector.apply(FeeRateEvent::OptionsFailed("offline".to_owned())),
        None
    );
    assert!(!selector.is_ready());
    assert!(selector.tiles().is_empty());
    assert_eq!(selector.effective_rate(), 5.0);
}

#[test]
fn short_service_list_only_shows_available_presets() {
    let mut selector = FeeRateSelector::new();
    selector.apply(FeeRateEvent::OptionsLoaded(FeeSummary {
        list: vec![FeeOption::preset("Slow", 3.0)],
    }));
    let kinds: Vec<_> = selector.tiles().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![FeeTierKind::Slow, FeeTierKind::Custom]);
    assert_eq!(selector.effective_rate(), 5.0);
}
