//! End-to-end flows through the public control surface.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use otp_entry::{KeyboardEvent, OtpInput, OtpProps, mask_destination};

fn press(key: &str) -> KeyboardEvent {
    KeyboardEvent::new(key)
}

#[test]
fn typing_a_full_code_and_confirming() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let received_clone = received.clone();
    let control = OtpInput::new(OtpProps::new(move |code: &str| {
        received_clone.borrow_mut().push(code.to_string());
    }));

    // Focus requests walk through slots 1, 2, 3 and stop at the last
    for (key, focus) in [("1", 1), ("2", 2), ("3", 3), ("4", 3)] {
        control.handle_key(&press(key));
        assert_eq!(control.focused_slot(), Some(focus));
    }
    assert!(control.is_complete());

    control.handle_key(&press("Enter"));
    assert_eq!(received.borrow().as_slice(), ["1234"]);
}

#[test]
fn pasting_mixed_text_extracts_digits() {
    let control = OtpInput::new(OtpProps::new(|_| {}));
    control.paste("ab12cd34ef");
    assert_eq!(
        control.slots(),
        vec![Some('1'), Some('2'), Some('3'), Some('4')]
    );
    assert_eq!(control.focused_slot(), Some(3));
}

#[test]
fn pasting_a_single_digit_focuses_slot_zero() {
    let control = OtpInput::new(OtpProps::new(|_| {}));
    control.paste("5");
    assert_eq!(control.slots(), vec![Some('5'), None, None, None]);
    assert_eq!(control.focused_slot(), Some(0));
}

#[test]
fn zero_duration_mount_is_immediately_resendable() {
    let resends = Rc::new(Cell::new(0));
    let resends_clone = resends.clone();
    let mut props = OtpProps::new(|_| {});
    props.cooldown_secs = 0;
    props.on_resend = Some(Rc::new(move || resends_clone.set(resends_clone.get() + 1)));
    let control = OtpInput::new(props);

    assert!(control.can_resend());
    assert!(control.resend());
    assert_eq!(resends.get(), 1);
}

#[test]
fn submit_mid_flight_is_a_single_invocation() {
    // The callback needs the control itself to attempt reentrancy, so it
    // is handed in through a shared slot filled after construction.
    let control_slot: Rc<RefCell<Option<Rc<OtpInput>>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));

    let slot_for_callback = control_slot.clone();
    let calls_clone = calls.clone();
    let mut props = OtpProps::new(move |_code: &str| {
        calls_clone.set(calls_clone.get() + 1);
        let control = slot_for_callback.borrow().clone().unwrap();

        assert!(control.is_verifying());
        assert!(!control.can_submit());
        // Second submit inside the busy window: no second invocation
        assert!(!control.submit());
        // Slot edits are inert while verifying
        assert!(!control.handle_key(&press("9")));
        assert!(!control.paste("9999"));
    });
    props.cooldown_secs = 0;

    let control = Rc::new(OtpInput::new(props));
    *control_slot.borrow_mut() = Some(control.clone());

    control.paste("1234");
    assert!(control.submit());

    assert_eq!(calls.get(), 1);
    assert!(!control.is_verifying());
    // Entered digits are preserved for correction after the callback
    assert_eq!(
        control.slots(),
        vec![Some('1'), Some('2'), Some('3'), Some('4')]
    );
}

#[test]
fn resend_clears_the_code_and_restarts_the_countdown() {
    let mut props = OtpProps::new(|_| {});
    props.cooldown_secs = 0;
    let control = OtpInput::new(props);

    control.paste("1234");
    assert!(control.resend());

    assert_eq!(control.slots(), vec![None; 4]);
    assert_eq!(control.focused_slot(), Some(0));
    // Duration 0: eligible again right away
    assert!(control.can_resend());
}

#[test]
fn premature_actions_never_reach_the_callbacks() {
    let submits = Rc::new(Cell::new(0));
    let resends = Rc::new(Cell::new(0));

    let submits_clone = submits.clone();
    let mut props = OtpProps::new(move |_| submits_clone.set(submits_clone.get() + 1));
    props.cooldown_secs = 300;
    let resends_clone = resends.clone();
    props.on_resend = Some(Rc::new(move || resends_clone.set(resends_clone.get() + 1)));
    let control = OtpInput::new(props);

    // Incomplete buffer
    control.handle_key(&press("1"));
    control.handle_key(&press("Enter"));
    assert_eq!(submits.get(), 0);

    // Cooldown still counting
    assert!(!control.resend());
    assert_eq!(resends.get(), 0);
    assert_eq!(control.slot(0), Some('1'));
}

#[test]
fn countdown_label_formats_canonical_duration() {
    let mut props = OtpProps::new(|_| {});
    props.cooldown_secs = 140;
    let control = OtpInput::new(props);
    // The first tick lands a second after mount
    assert_eq!(control.countdown_label(), "02:20");
}

#[test]
fn masked_destination_flows_through_display_params() {
    let mut props = OtpProps::new(|_| {});
    props.title = "Forgot Password".to_string();
    props.destination = mask_destination("johndoe@mail.com");
    let control = OtpInput::new(props);

    assert_eq!(control.title(), "Forgot Password");
    assert_eq!(control.destination(), "joh****@mail.com");
}
