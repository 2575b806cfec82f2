//! The scrolling strip of greeting cards.

use std::path::PathBuf;

use dioxus::prelude::*;
use greeting_deck::{rendered_cards, CardEntry, LoadState, PageState, RenderedCard, ScrollDirection};

use crate::player::CAROUSEL_ELEMENT_ID;
use crate::timers::SharedTimers;

use super::start_playback;

/// Tripled card strip with arrow buttons and hover-gated auto-scroll.
#[component]
pub fn CardStrip(
    state: Signal<PageState>,
    images: Signal<Vec<LoadState>>,
    asset_dir: PathBuf,
) -> Element {
    let timers = use_context::<SharedTimers>();

    let (cards, transform) = {
        let page = state.read();
        (page.deck.cards().to_vec(), page.carousel.strip_transform())
    };
    let blocks = rendered_cards(cards.len());

    let scroll = {
        let timers = timers.clone();
        move |direction: ScrollDirection| {
            let mut state = state;
            let command = state.write().scroll(direction);
            if let Some(command) = command {
                timers.borrow_mut().run(command, state);
            }
        }
    };
    let scroll_left = scroll.clone();
    let scroll_right = scroll;

    let hover = {
        let timers = timers.clone();
        move |hovering: bool| {
            let mut state = state;
            let command = state.write().set_hovering(hovering);
            if let Some(command) = command {
                timers.borrow_mut().run(command, state);
            }
        }
    };
    let on_enter = {
        let hover = hover.clone();
        move |_: MouseEvent| hover(true)
    };
    let on_leave = move |_: MouseEvent| hover(false);

    rsx! {
        button {
            class: "scroll-button scroll-button-left",
            onclick: move |_| scroll_left(ScrollDirection::Left),
            "\u{2039}"
        }
        button {
            class: "scroll-button scroll-button-right",
            onclick: move |_| scroll_right(ScrollDirection::Right),
            "\u{203a}"
        }

        div {
            id: CAROUSEL_ELEMENT_ID,
            class: "card-carousel",
            onmouseenter: on_enter,
            onmouseleave: on_leave,

            div {
                class: "card-track",
                style: "transform: {transform};",

                for (block_index, block) in blocks.into_iter().enumerate() {
                    div {
                        key: "{block_index}",
                        class: "card-block",
                        for placement in block.into_iter() {
                            GreetingCard {
                                key: "{placement.block}-{placement.index}",
                                card: cards[placement.index].clone(),
                                placement,
                                image: images.read()[placement.index].clone(),
                                on_select: {
                                    let asset_dir = asset_dir.clone();
                                    move |_| {
                                        let mut state = state;
                                        let request = state.write().click_card(placement.flat_index);
                                        if let Some(request) = request {
                                            start_playback(state, request, asset_dir.clone());
                                        }
                                    }
                                },
                                on_image_error: move |_| {
                                    let mut images = images;
                                    let mut list = images.write();
                                    if !list[placement.index].is_failed() {
                                        tracing::warn!(card = placement.index, "Card image failed to load, using placeholder");
                                        list[placement.index].fail();
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One greeting card.
#[component]
pub fn GreetingCard(
    card: CardEntry,
    placement: RenderedCard,
    image: LoadState,
    on_select: EventHandler<()>,
    on_image_error: EventHandler<()>,
) -> Element {
    let transform = placement.transform();

    rsx! {
        div {
            class: "greeting-card",
            style: "transform: {transform};",
            onclick: move |_| on_select.call(()),

            div {
                class: "card-picture",
                if let Some(src) = image.src() {
                    img {
                        class: "card-image",
                        src: "{src}",
                        alt: "{card.title}",
                        onerror: move |_| on_image_error.call(()),
                    }
                } else {
                    div { class: "card-image card-image-loading" }
                }
                div {
                    class: "card-shade",
                    span {
                        class: "card-glyph {card.icon.css_class()}",
                        "{card.icon.symbol()}"
                    }
                }
            }

            div {
                class: "card-body",
                h2 { class: "card-title", "{card.title}" }
                p { class: "card-message", "{card.message}" }
            }
        }
    }
}
