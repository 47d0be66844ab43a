// Host-side tests for field parameters and viewport classes.

use glyphfield_core::*;

#[test]
fn default_params_are_valid() {
    assert_eq!(FieldParams::default().validate(), Ok(()));
}

#[test]
fn validation_rejects_broken_params() {
    let base = FieldParams::default();

    let empty = FieldParams {
        alphabet: &[],
        ..base.clone()
    };
    assert_eq!(empty.validate(), Err(ParamsError::EmptyAlphabet));

    let inverted = FieldParams {
        depth_near: 150.0,
        depth_far: 50.0,
        ..base.clone()
    };
    assert!(matches!(
        inverted.validate(),
        Err(ParamsError::InvalidDepthRange { .. })
    ));

    let no_radius = FieldParams {
        interaction_radius: 0.0,
        ..base.clone()
    };
    assert_eq!(
        no_radius.validate(),
        Err(ParamsError::NonPositive {
            name: "interaction_radius",
            value: 0.0
        })
    );

    let negative_margin = FieldParams {
        wrap_margin: -1.0,
        ..base.clone()
    };
    assert!(matches!(
        negative_margin.validate(),
        Err(ParamsError::Negative {
            name: "wrap_margin",
            ..
        })
    ));

    let crossed = FieldParams {
        mobile_max_width: 1300.0,
        ..base
    };
    assert!(matches!(
        crossed.validate(),
        Err(ParamsError::InvalidThresholds { .. })
    ));
}

#[test]
fn params_error_messages_name_the_field() {
    let err = ParamsError::NonPositive {
        name: "glyph_base_size",
        value: -2.0,
    };
    assert_eq!(err.to_string(), "glyph_base_size must be positive, got -2");
}

#[test]
fn viewport_tiers_follow_thresholds() {
    let params = FieldParams::default();
    assert_eq!(Viewport::new(767.0, 500.0).tier(&params), SizeTier::Disabled);
    assert_eq!(Viewport::new(768.0, 500.0).tier(&params), SizeTier::Small);
    assert_eq!(Viewport::new(1199.5, 500.0).tier(&params), SizeTier::Small);
    assert_eq!(Viewport::new(1200.0, 500.0).tier(&params), SizeTier::Large);
    assert!(Viewport::new(320.0, 640.0).is_disabled(&params));
    assert_eq!(Viewport::new(1920.0, 1080.0).particle_count(&params), 150);
    assert_eq!(Viewport::new(900.0, 1080.0).particle_count(&params), 100);
}

#[test]
fn parallax_is_one_at_the_near_plane() {
    let params = FieldParams::default();
    assert_eq!(params.parallax(50.0), 1.0);
    assert_eq!(params.parallax(100.0), 0.5);
    assert!(params.parallax(60.0) > params.parallax(140.0));
}
