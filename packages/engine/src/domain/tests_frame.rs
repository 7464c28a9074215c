//! Unit tests for the frame state machine.

use crate::domain::frame::{Frame, FrameState};
use crate::domain::roll::Roll;
use crate::errors::domain::{DomainError, ValidationKind};

fn normal_frame() -> Frame {
    Frame::new(false)
}

fn last_frame() -> Frame {
    Frame::new(true)
}

#[test]
fn open_frame_progresses_through_states() {
    let mut frame = normal_frame();
    assert_eq!(frame.state(), FrameState::Open);

    frame.add_roll(4).unwrap();
    assert_eq!(frame.state(), FrameState::OneRoll);
    assert!(!frame.is_complete());

    frame.add_roll(5).unwrap();
    assert_eq!(frame.state(), FrameState::Complete);
    assert_eq!(frame.rolls(), &[Roll::Pins(4), Roll::Pins(5)]);
    assert_eq!(frame.pin_total(), 9);
    assert!(!frame.is_strike());
    assert!(!frame.is_spare());
}

#[test]
fn strike_completes_frame_without_second_roll() {
    let mut frame = normal_frame();
    frame.add_roll(10).unwrap();

    assert!(frame.is_strike());
    assert_eq!(frame.state(), FrameState::Complete);
    assert_eq!(frame.rolls().len(), 1);

    let err = frame.add_roll(0).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::FrameComplete, _) => {}
        other => panic!("expected FrameComplete, got {other:?}"),
    }
    assert_eq!(frame.rolls().len(), 1);
}

#[test]
fn spare_is_detected_across_two_rolls() {
    let mut frame = normal_frame();
    frame.add_roll(7).unwrap();
    frame.add_roll(3).unwrap();

    assert!(frame.is_spare());
    assert!(!frame.is_strike());
    assert!(frame.is_complete());
}

#[test]
fn gutter_rolls_are_legal() {
    let mut frame = normal_frame();
    frame.add_roll(0).unwrap();
    frame.add_roll(0).unwrap();

    assert!(frame.is_complete());
    assert!(!frame.is_spare());
    assert_eq!(frame.pin_total(), 0);
}

#[test]
fn second_roll_cannot_exceed_rack() {
    let mut frame = normal_frame();
    frame.add_roll(6).unwrap();

    let err = frame.add_roll(5).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::FrameOverflow, _) => {}
        other => panic!("expected FrameOverflow, got {other:?}"),
    }

    // The rejected roll must leave the frame untouched.
    assert_eq!(frame.rolls(), &[Roll::Pins(6)]);
    assert_eq!(frame.state(), FrameState::OneRoll);

    frame.add_roll(4).unwrap();
    assert!(frame.is_complete());
}

#[test]
fn last_frame_open_completes_in_two_rolls() {
    let mut frame = last_frame();
    frame.add_roll(3).unwrap();
    frame.add_roll(4).unwrap();

    assert_eq!(frame.state(), FrameState::Complete);
    assert!(frame.add_roll(2).is_err());
}

#[test]
fn last_frame_first_two_rolls_share_a_rack() {
    let mut frame = last_frame();
    frame.add_roll(5).unwrap();

    let err = frame.add_roll(9).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::FrameOverflow, _)
    ));
    assert_eq!(frame.rolls().len(), 1);
}

#[test]
fn last_frame_spare_earns_one_bonus_roll() {
    let mut frame = last_frame();
    frame.add_roll(6).unwrap();
    frame.add_roll(4).unwrap();
    assert_eq!(frame.state(), FrameState::NeedsBonusRoll);

    // Spare resets the rack: a full strike is legal as the bonus ball.
    frame.add_roll(10).unwrap();
    assert_eq!(frame.state(), FrameState::Complete);
    assert_eq!(frame.pin_total(), 20);
}

#[test]
fn last_frame_strike_earns_two_bonus_rolls() {
    let mut frame = last_frame();
    frame.add_roll(10).unwrap();
    assert_eq!(frame.state(), FrameState::OneRoll);

    frame.add_roll(10).unwrap();
    assert_eq!(frame.state(), FrameState::NeedsBonusRoll);

    frame.add_roll(10).unwrap();
    assert_eq!(frame.state(), FrameState::Complete);
    assert_eq!(frame.pin_total(), 30);
}

#[test]
fn last_frame_bonus_balls_share_a_rack_unless_struck() {
    let mut frame = last_frame();
    frame.add_roll(10).unwrap();
    frame.add_roll(6).unwrap();

    // 6 left 4 pins standing; 7 is impossible on that rack.
    let err = frame.add_roll(7).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::FrameOverflow, _)
    ));

    frame.add_roll(4).unwrap();
    assert!(frame.is_complete());
    assert_eq!(frame.pin_total(), 20);
}

#[test]
fn placeholders_never_count_toward_pins() {
    let mut frame = normal_frame();
    frame.push_raw(Roll::Placeholder);
    assert!(frame.rolls()[0].is_placeholder());

    // A placeholder occupies a cell but the frame is still untouched in
    // real-roll terms.
    assert_eq!(frame.state(), FrameState::Open);
    assert_eq!(frame.pin_total(), 0);

    frame.add_roll(10).unwrap();
    assert!(frame.is_strike());
    assert_eq!(frame.state(), FrameState::Complete);
    assert_eq!(frame.pin_total(), 10);
    assert_eq!(frame.rolls().len(), 2);
    assert_eq!(frame.real_rolls().collect::<Vec<_>>(), vec![10]);
}
