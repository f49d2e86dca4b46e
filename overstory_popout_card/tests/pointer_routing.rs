// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of raw document pointer events into `PopoutCard`.

use overstory_popout_card::card::PopoutCard;
use overstory_popout_card::props::PopoutCardProps;
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerInfo, PointerState, PointerType,
};
use understory_disclosure::document::DocumentListeners;
use understory_disclosure::state::{Disclosure, Transition};

const ROOT: u32 = 1;
const WRAPPER: u32 = 2;
const ELSEWHERE: u32 = 7;

fn parents(n: &u32) -> Option<u32> {
    (*n == WRAPPER).then_some(ROOT)
}

fn mouse() -> PointerInfo {
    PointerInfo {
        pointer_id: None,
        persistent_device_id: None,
        pointer_type: PointerType::Mouse,
    }
}

fn down() -> PointerEvent {
    PointerEvent::Down(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: mouse(),
        state: PointerState::default(),
    })
}

fn up() -> PointerEvent {
    PointerEvent::Up(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: mouse(),
        state: PointerState::default(),
    })
}

#[test]
fn only_presses_are_routed() {
    let mut doc = DocumentListeners::new();
    let mut card: PopoutCard<u32, ()> = PopoutCard::new(PopoutCardProps::new((), ()));
    card.mount(ROOT, WRAPPER, &mut doc, ());
    card.pointer_enter();

    assert_eq!(card.document_pointer_event(&up(), Some(ELSEWHERE), &parents), None);
    assert_eq!(card.document_pointer_event(&PointerEvent::Leave(mouse()), None, &parents), None);
    assert_eq!(card.state(), Disclosure::Expanded);

    assert_eq!(card.document_pointer_event(&down(), Some(WRAPPER), &parents), None);
    assert_eq!(
        card.document_pointer_event(&down(), Some(ELSEWHERE), &parents),
        Some(Transition::Collapse)
    );
}
