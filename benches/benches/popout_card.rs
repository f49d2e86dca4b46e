// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use overstory_popout_card::card::PopoutCard;
use overstory_popout_card::props::{
    ActionIcon, ActionsPlacement, PopoutCardProps, PrimaryButtonKind,
};
use ui_events::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};
use understory_disclosure::document::DocumentListeners;
use understory_layout_sync::after_layout::AfterLayout;
use understory_layout_sync::sync::LayoutHost;

struct FixedLayout;

impl LayoutHost<u32> for FixedLayout {
    fn is_alive(&self, _node: u32) -> bool {
        true
    }

    fn layout_size(&self, _node: u32) -> Option<Size> {
        Some(Size::new(320.0, 240.0))
    }

    fn set_custom_property(&mut self, node: u32, name: &str, value: &str) {
        black_box((node, name, value));
    }
}

fn props(actions: usize) -> PopoutCardProps<&'static str> {
    let mut props = PopoutCardProps::new("Body", "Details")
        .gradient("linear-gradient(90deg, #0f62fe, #a56eff)")
        .primary_button("Read more", PrimaryButtonKind::Primary)
        .actions_placement(ActionsPlacement::Top)
        .class_name("bench-card")
        .attribute("data-testid", "card");
    for i in 0..actions {
        let id = if i % 2 == 0 { "edit" } else { "docs" };
        props = props.action_icon(ActionIcon::new(id, "icon", "Action").on_click(|| {}));
    }
    props
}

fn parents(n: &u32) -> Option<u32> {
    (*n == 2).then_some(1)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("overstory_popout_card/render");
    for &actions in &[0_usize, 4, 16] {
        let mut doc = DocumentListeners::new();
        let mut card = PopoutCard::new(props(actions));
        card.mount(1_u32, 2_u32, &mut doc, ());
        group.bench_function(format!("collapsed(actions={actions})"), |b| {
            b.iter(|| black_box(card.render().root.class.len()));
        });
        card.pointer_enter();
        group.bench_function(format!("expanded(actions={actions})"), |b| {
            b.iter(|| black_box(card.render().instructions.action_icons.len()));
        });
    }
    group.finish();
}

fn bench_hover_cycle(c: &mut Criterion) {
    let enter = KeyboardEvent {
        key: Key::Named(NamedKey::Enter),
        state: KeyState::Down,
        ..KeyboardEvent::default()
    };
    c.bench_function("overstory_popout_card/hover_enter_outside", |b| {
        let mut doc = DocumentListeners::new();
        let mut card = PopoutCard::new(props(4));
        card.mount(1_u32, 2_u32, &mut doc, ());
        b.iter(|| {
            card.pointer_enter();
            card.pointer_leave();
            card.key_down(&enter, 2, &parents);
            black_box(card.document_pointer_down(Some(9), &parents));
        });
    });
}

fn bench_commit_and_measure(c: &mut Criterion) {
    c.bench_function("overstory_popout_card/commit_measure", |b| {
        let mut queue = AfterLayout::new();
        let mut host = FixedLayout;
        b.iter_batched(
            || {
                let mut doc = DocumentListeners::new();
                let mut card = PopoutCard::new(props(0));
                card.mount(1_u32, 2_u32, &mut doc, ());
                (card, doc)
            },
            |(mut card, mut doc)| {
                card.commit(&mut queue);
                card.set_popout_content("More details");
                card.commit(&mut queue);
                queue.run(|task| {
                    black_box(task.run(&mut host));
                });
                card.unmount(&mut doc);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_render,
    bench_hover_cycle,
    bench_commit_and_measure
);
criterion_main!(benches);
