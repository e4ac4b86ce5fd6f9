use log_overlay::overlay::{
    EventOutcome, GesturePhase, OverlayController, OverlayGeometry, PanEvent, Position,
    SnapEdge, SpringSpec, Viewport,
};

fn phone() -> OverlayController {
    OverlayController::new(
        Viewport::new(390.0, 844.0),
        OverlayGeometry::default(),
        SpringSpec::default(),
    )
}

fn update(dx: f32, dy: f32) -> PanEvent {
    PanEvent::Update {
        translation_x: dx,
        translation_y: dy,
    }
}

fn settle(c: &mut OverlayController) {
    let mut frames = 0;
    while c.tick(1.0 / 60.0) {
        assert!(c.bounds().contains(c.position()), "left bounds while snapping");
        frames += 1;
        assert!(frames < 1_000, "snap never settled");
    }
}

// Deterministic pseudo-random stream for drag sequences.
struct Lcg(u64);

impl Lcg {
    fn next_f32(&mut self, range: f32) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let unit = (self.0 >> 40) as f32 / (1u64 << 24) as f32;
        (unit * 2.0 - 1.0) * range
    }
}

#[test]
fn initial_position_is_bottom_right() {
    let c = phone();
    assert_eq!(c.position(), Position::new(312.0, 694.0));
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert_eq!(c.opacity(), 1.0);
}

#[test]
fn drag_left_and_release_snaps_to_left_edge() {
    let mut c = phone();
    assert_eq!(c.handle(PanEvent::Start), EventOutcome::Applied);
    assert!(c.is_dragging());
    assert_eq!(c.opacity(), 0.8);
    c.handle(update(-250.0, 0.0));
    assert_eq!(c.position(), Position::new(62.0, 694.0));
    assert_eq!(c.snap_edge(), SnapEdge::Left);

    c.handle(PanEvent::End);
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert_eq!(c.snap_target(), Some(20.0));
    assert!(c.is_animating());
    settle(&mut c);
    assert_eq!(c.position(), Position::new(20.0, 694.0));
}

#[test]
fn release_right_of_center_snaps_to_right_edge() {
    let mut c = phone();
    c.handle(PanEvent::Start);
    c.handle(update(-100.0, -300.0));
    c.handle(PanEvent::End);
    settle(&mut c);
    assert_eq!(c.position(), Position::new(312.0, 394.0));
}

#[test]
fn release_exactly_at_center_goes_right() {
    let mut c = phone();
    c.handle(PanEvent::Start);
    c.handle(update(195.0 - 312.0, 0.0));
    assert_eq!(c.position().x, 195.0);
    c.handle(PanEvent::End);
    settle(&mut c);
    assert_eq!(c.position().x, 312.0);
}

#[test]
fn clamps_on_every_update_not_only_on_release() {
    let mut c = phone();
    c.handle(PanEvent::Start);
    c.handle(update(-1_000.0, -1_000.0));
    assert_eq!(c.position(), Position::new(20.0, 50.0));
    c.handle(update(1_000.0, 1_000.0));
    assert_eq!(c.position(), Position::new(312.0, 694.0));
}

#[test]
fn random_drags_never_leave_bounds_and_always_end_on_an_edge() {
    let mut rng = Lcg(7);
    let mut c = phone();
    for _ in 0..200 {
        c.handle(PanEvent::Start);
        for _ in 0..20 {
            let (dx, dy) = (rng.next_f32(800.0), rng.next_f32(1_200.0));
            c.handle(update(dx, dy));
            assert!(c.bounds().contains(c.position()), "{:?}", c.position());
        }
        let released_x = c.position().x;
        let y = c.position().y;
        c.handle(PanEvent::End);
        settle(&mut c);
        let expected = if released_x < 195.0 { 20.0 } else { 312.0 };
        assert_eq!(c.position().x, expected);
        assert_eq!(c.position().y, y, "no vertical snap");
    }
}

#[test]
fn malformed_events_are_ignored() {
    let mut c = phone();
    let before = c.position();
    assert_eq!(c.handle(update(-100.0, -100.0)), EventOutcome::Ignored);
    assert_eq!(c.handle(PanEvent::End), EventOutcome::Ignored);
    assert_eq!(c.position(), before);
    assert!(!c.is_animating());

    c.handle(PanEvent::Start);
    c.handle(update(-10.0, 0.0));
    assert_eq!(c.handle(PanEvent::Start), EventOutcome::Ignored);
    assert_eq!(c.session().map(|s| s.start_x), Some(312.0));
}

#[test]
fn close_button_follows_the_button() {
    let mut c = phone();
    assert_eq!(c.close_button_position(), Position::new(316.0, 644.0));
    c.handle(PanEvent::Start);
    c.handle(update(0.0, -100.0));
    assert_eq!(c.close_button_position(), Position::new(316.0, 544.0));
}

#[test]
fn tiny_viewport_collapses_the_drag_range() {
    let mut c = OverlayController::new(
        Viewport::new(50.0, 80.0),
        OverlayGeometry::default(),
        SpringSpec::default(),
    );
    assert!(c.bounds().is_collapsed());
    c.handle(PanEvent::Start);
    c.handle(update(30.0, 30.0));
    assert_eq!(c.position(), Position::new(20.0, 50.0));
    c.handle(PanEvent::End);
    settle(&mut c);
    assert_eq!(c.position(), Position::new(20.0, 50.0));
}

#[test]
fn resize_reclamps_position() {
    let mut c = phone();
    c.resize(Viewport::new(300.0, 600.0));
    assert_eq!(c.position(), Position::new(222.0, 450.0));
    assert!(c.bounds().contains(c.position()));
}

#[test]
fn critically_damped_spring_still_lands_on_edge() {
    let mut c = OverlayController::new(
        Viewport::new(390.0, 844.0),
        OverlayGeometry::default(),
        SpringSpec::critically_damped(),
    );
    c.handle(PanEvent::Start);
    c.handle(update(-150.0, 0.0));
    c.handle(PanEvent::End);
    settle(&mut c);
    assert_eq!(c.position().x, 20.0);
}

#[test]
fn huge_frame_gap_finishes_the_snap_immediately() {
    for dt in [f32::INFINITY, 1.0e6] {
        let mut c = phone();
        c.handle(PanEvent::Start);
        c.handle(update(-250.0, 0.0));
        c.handle(PanEvent::End);
        assert!(c.is_animating());
        assert!(!c.tick(dt));
        assert_eq!(c.position(), Position::new(20.0, 694.0));
        assert!(!c.is_animating());
    }
}
